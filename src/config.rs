use core::fmt;
use core::ops::RangeInclusive;

pub const BOARD_SIZE: u8 = 10;

/// Default fleet, in placement order. Ship ids are assigned from 1 upward.
pub const SHIP_LENGTHS: [usize; 5] = [5, 4, 3, 2, 2];

/// Total number of ship segments in the default fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 2 + 2;

/// Samples allowed per ship before random placement gives up.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 100;

/// Blind scalars are drawn from this range for every shot.
pub const BLIND_RANGE: RangeInclusive<u64> = 1..=100;

pub const BFV_DEGREE: usize = 2048;
pub const BFV_MODULI: [u64; 1] = [0x3fffffff000001];
/// Prime, and congruent to 1 modulo `2 * BFV_DEGREE` so slot encoding works.
pub const BFV_PLAINTEXT_MODULUS: u64 = 65537;

/// BFV parameter set handed to the encryption backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BfvConfig {
    pub degree: usize,
    pub moduli: Vec<u64>,
    pub plaintext_modulus: u64,
}

impl Default for BfvConfig {
    fn default() -> Self {
        Self {
            degree: BFV_DEGREE,
            moduli: BFV_MODULI.to_vec(),
            plaintext_modulus: BFV_PLAINTEXT_MODULUS,
        }
    }
}

/// Runtime game configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub ship_lengths: Vec<usize>,
    pub blind_range: RangeInclusive<u64>,
    pub bfv: BfvConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            ship_lengths: SHIP_LENGTHS.to_vec(),
            blind_range: BLIND_RANGE,
            bfv: BfvConfig::default(),
        }
    }
}

/// Reasons a [`GameConfig`] is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The fleet is empty.
    NoShips,
    /// A ship is zero-length or longer than the board side.
    InvalidShipLength(usize),
    /// Fleet area exceeds the board area.
    FleetTooLarge { cells: usize },
    /// Blind range contains zero or is empty.
    InvalidBlindRange,
    /// Ship ids or blind scalars would wrap the plaintext modulus.
    PlaintextModulusTooSmall(u64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NoShips => write!(f, "Fleet has no ships"),
            ConfigError::InvalidShipLength(len) => {
                write!(f, "Ship length {} does not fit a {}x{} board", len, BOARD_SIZE, BOARD_SIZE)
            }
            ConfigError::FleetTooLarge { cells } => {
                write!(f, "Fleet needs {} cells, more than the board holds", cells)
            }
            ConfigError::InvalidBlindRange => write!(f, "Blind range must be non-empty and exclude zero"),
            ConfigError::PlaintextModulusTooSmall(t) => {
                write!(f, "Plaintext modulus {} is too small for the fleet or blind range", t)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl GameConfig {
    /// Sum of all ship lengths.
    pub fn total_ship_cells(&self) -> usize {
        self.ship_lengths.iter().sum()
    }

    /// Check the fleet fits the board and that blinding keeps nonzero
    /// cells nonzero modulo the plaintext modulus.
    ///
    /// Fleets close to board capacity still pass; random placement then
    /// reports `UnableToPlaceShip` instead of looping.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ship_lengths.is_empty() {
            return Err(ConfigError::NoShips);
        }
        let side = BOARD_SIZE as usize;
        if let Some(&len) = self.ship_lengths.iter().find(|&&l| l == 0 || l > side) {
            return Err(ConfigError::InvalidShipLength(len));
        }
        let cells = self.total_ship_cells();
        if cells > side * side {
            return Err(ConfigError::FleetTooLarge { cells });
        }
        check_blind_range(&self.blind_range)?;
        // with a prime modulus t, r*v is nonzero mod t whenever 0 < r, v < t
        let t = self.bfv.plaintext_modulus;
        let max_id = self.ship_lengths.len() as u64;
        if max_id >= t || *self.blind_range.end() >= t {
            return Err(ConfigError::PlaintextModulusTooSmall(t));
        }
        Ok(())
    }
}

/// Blind scalars must be drawable and never zero.
pub(crate) fn check_blind_range(range: &RangeInclusive<u64>) -> Result<(), ConfigError> {
    if range.is_empty() || *range.start() == 0 {
        return Err(ConfigError::InvalidBlindRange);
    }
    Ok(())
}
