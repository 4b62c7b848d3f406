use super::constants::PALETTE_LEN;
use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PaletteError {
    #[error("palette catalog is empty")]
    Empty,
    #[error("palette {index} has {len} colors, expected 5")]
    WrongLength { index: usize, len: usize },
}

/// Five colors: the background first, then one per row in reverse row order.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Palette([String; PALETTE_LEN]);

impl Palette {
    pub fn new(colors: [String; PALETTE_LEN]) -> Self {
        Self(colors)
    }

    pub fn from_strs(colors: [&str; PALETTE_LEN]) -> Self {
        Self(colors.map(str::to_owned))
    }

    pub fn colors(&self) -> &[String; PALETTE_LEN] {
        &self.0
    }

    pub fn background(&self) -> &str {
        &self.0[0]
    }

    /// Fill color for row `row`; the first row takes the last color.
    pub fn row_color(&self, row: usize) -> Option<&str> {
        if row >= PALETTE_LEN - 1 {
            return None;
        }
        Some(&self.0[PALETTE_LEN - 1 - row])
    }
}

impl TryFrom<Vec<String>> for Palette {
    type Error = usize;

    /// Fails with the offending length when the tuple is not exactly five colors.
    fn try_from(colors: Vec<String>) -> Result<Self, usize> {
        let len = colors.len();
        <[String; PALETTE_LEN]>::try_from(colors)
            .map(Self)
            .map_err(|_| len)
    }
}

/// Uniformly shuffled copy of `catalog`.
pub fn shuffle<R: Rng + ?Sized>(catalog: &[Palette], rng: &mut R) -> Vec<Palette> {
    let mut out = catalog.to_vec();
    out.shuffle(rng);
    out
}

/// Result of `PaletteSet::load`.
#[derive(Clone, Debug)]
pub struct Loaded {
    pub set: PaletteSet,
    /// One `WrongLength` per skipped tuple, in input order.
    pub rejected: Vec<PaletteError>,
    /// No caller tuple was usable and the fallback catalog was taken.
    pub fell_back: bool,
}

/// Immutable palette catalog with a wrapping cursor over the active entry.
#[derive(Clone, Debug)]
pub struct PaletteSet {
    catalog: Vec<Palette>,
    cursor: usize,
}

impl PaletteSet {
    pub fn new(catalog: Vec<Palette>) -> Result<Self, PaletteError> {
        if catalog.is_empty() {
            return Err(PaletteError::Empty);
        }
        Ok(Self { catalog, cursor: 0 })
    }

    pub fn from_static(catalog: &[[&str; PALETTE_LEN]]) -> Result<Self, PaletteError> {
        Self::new(catalog.iter().copied().map(Palette::from_strs).collect())
    }

    /// Build from loosely typed caller tuples. Tuples that are not exactly
    /// five colors are skipped and reported; when none survive, `fallback`
    /// is used instead.
    pub fn load<I>(tuples: I, fallback: &[[&str; PALETTE_LEN]]) -> Result<Loaded, PaletteError>
    where
        I: IntoIterator<Item = Vec<String>>,
    {
        let mut accepted = Vec::new();
        let mut rejected = Vec::new();
        for (index, colors) in tuples.into_iter().enumerate() {
            match Palette::try_from(colors) {
                Ok(palette) => accepted.push(palette),
                Err(len) => rejected.push(PaletteError::WrongLength { index, len }),
            }
        }
        let fell_back = accepted.is_empty();
        let set = if fell_back {
            Self::from_static(fallback)?
        } else {
            Self::new(accepted)?
        };
        Ok(Loaded {
            set,
            rejected,
            fell_back,
        })
    }

    /// Shuffle the catalog and rewind the cursor to the first entry.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.catalog = shuffle(&self.catalog, rng);
        self.cursor = 0;
    }

    /// Make entry `index` (modulo the catalog length) the active palette.
    pub fn activate(&mut self, index: usize) -> &Palette {
        self.cursor = index % self.catalog.len();
        &self.catalog[self.cursor]
    }

    /// Advance to the next palette, wrapping after the last one.
    pub fn next(&mut self) -> &Palette {
        self.activate(self.cursor + 1)
    }

    pub fn active(&self) -> &Palette {
        &self.catalog[self.cursor]
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    pub fn palettes(&self) -> &[Palette] {
        &self.catalog
    }
}
