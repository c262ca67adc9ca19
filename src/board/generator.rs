//! Board generation.
//!
//! A game is built in three steps:
//!
//! 1. Check the requested dimensions (range first, then parity).
//! 2. Take `rows * columns / 2` unique cards and put two copies of each in a deck.
//! 3. Shuffle the deck and deal it into the grid, row by row.
//!
//! `BoardGenerator` owns its RNG, so a seeded generator always produces the
//! same sequence of boards:
//!
//! ```
//! use memory_board::board::BoardGenerator;
//!
//! let mut a = BoardGenerator::new(42);
//! let mut b = BoardGenerator::new(42);
//!
//! assert_eq!(a.create_game(4, 4).unwrap(), b.create_game(4, 4).unwrap());
//! ```

use log::{debug, error, warn};

use crate::cards::CardId;
use crate::core::{BoardConfig, BoardError, DimensionError, GameRng, Result};

use super::grid::Board;
use super::result::GameResult;

/// Check `rows` and `columns` against the standard limits.
///
/// Rules are applied in order and the first violation is returned:
/// rows at least 1, rows at most 6, columns at least 1, columns at most 6,
/// and at least one of the two even.
pub fn validate_dimensions(rows: i64, columns: i64) -> Result<()> {
    check_dimensions(&BoardConfig::default(), rows, columns).map(drop)
}

/// Apply the dimension rules and return the cell count.
fn check_dimensions(config: &BoardConfig, rows: i64, columns: i64) -> Result<usize> {
    if rows < 1 {
        return Err(DimensionError::RowsTooSmall.into());
    }
    if rows > config.max_rows {
        return Err(DimensionError::RowsTooLarge { max: config.max_rows }.into());
    }
    if columns < 1 {
        return Err(DimensionError::ColumnsTooSmall.into());
    }
    if columns > config.max_columns {
        return Err(DimensionError::ColumnsTooLarge {
            max: config.max_columns,
        }
        .into());
    }
    if columns % 2 != 0 && rows % 2 != 0 {
        return Err(DimensionError::BothOdd.into());
    }
    cell_count(rows, columns).ok_or(DimensionError::TooManyCells { rows, columns }.into())
}

/// Cells on a `rows` x `columns` board, if the product fits and every pair fits a `CardId`.
fn cell_count(rows: i64, columns: i64) -> Option<usize> {
    let cells = rows.checked_mul(columns)?;
    u32::try_from(cells / 2).ok()?;
    usize::try_from(cells).ok()
}

/// The unique cards `0..count`. A count of zero or less gives no cards.
#[must_use]
pub fn get_unique_cards(count: i64) -> Vec<CardId> {
    let count = u32::try_from(count.max(0)).unwrap_or(u32::MAX);
    (0..count).map(CardId::new).collect()
}

/// Create a game with a freshly seeded generator.
///
/// Each call is independent. Use [`BoardGenerator`] directly for
/// reproducible boards.
pub fn create_game(rows: i64, columns: i64) -> Result<GameResult> {
    BoardGenerator::from_entropy().create_game(rows, columns)
}

/// Deal `unique_cards` (twice each) onto a `rows` x `columns` board with a
/// freshly seeded generator.
pub fn create_board(rows: i64, columns: i64, unique_cards: &[CardId]) -> Result<Board> {
    BoardGenerator::from_entropy().create_board(rows, columns, unique_cards)
}

/// Generates shuffled memory boards from an owned RNG.
#[derive(Clone, Debug)]
pub struct BoardGenerator {
    config: BoardConfig,
    rng: GameRng,
}

impl BoardGenerator {
    /// Generator with the standard limits and a fixed seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_config(BoardConfig::default().with_seed(seed))
    }

    /// Generator with the standard limits, seeded from entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::with_config(BoardConfig::default())
    }

    /// Generator from an explicit configuration.
    #[must_use]
    pub fn with_config(config: BoardConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Self { config, rng }
    }

    /// Generator that shuffles with the given RNG.
    #[must_use]
    pub fn with_rng(config: BoardConfig, rng: GameRng) -> Self {
        Self { config, rng }
    }

    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Seed of the underlying RNG, for reproducing a board.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Check dimensions against this generator's limits.
    pub fn validate_dimensions(&self, rows: i64, columns: i64) -> Result<()> {
        check_dimensions(&self.config, rows, columns).map(drop)
    }

    /// Validate, warn on rejection, and return the cell count.
    fn validate_logged(&self, rows: i64, columns: i64) -> Result<usize> {
        check_dimensions(&self.config, rows, columns)
            .inspect_err(|e| warn!("rejected {}x{} board: {}", rows, columns, e))
    }

    /// Create a complete game: unique cards plus a shuffled board.
    pub fn create_game(&mut self, rows: i64, columns: i64) -> Result<GameResult> {
        // Dimensions are bounded before the card count is derived from them.
        let cells = self.validate_logged(rows, columns)?;

        let unique_cards = get_unique_cards((cells / 2) as i64);
        let board = self.create_board(rows, columns, &unique_cards)?;

        debug!(
            "created {}x{} board with {} pairs (seed {})",
            rows,
            columns,
            unique_cards.len(),
            self.rng.seed()
        );

        Ok(GameResult {
            rows_count: rows,
            columns_count: columns,
            unique_cards,
            board,
        })
    }

    /// Deal two copies of each card in `unique_cards` onto the board.
    ///
    /// Fails with [`BoardError::InvalidDimensions`] on bad dimensions and with
    /// [`BoardError::Integrity`] if the deck does not fill the grid exactly.
    pub fn create_board(
        &mut self,
        rows: i64,
        columns: i64,
        unique_cards: &[CardId],
    ) -> Result<Board> {
        let expected = self.validate_logged(rows, columns)?;

        let mut deck = [unique_cards, unique_cards].concat();
        self.rng.shuffle(&mut deck);

        // Validated dimensions are positive and their product fits in usize.
        let (rows, columns) = (rows as usize, columns as usize);
        if deck.len() != expected {
            let err = BoardError::Integrity {
                expected,
                actual: deck.len(),
            };
            error!("{}", err);
            return Err(err);
        }

        let mut cells = Vec::with_capacity(expected);
        for _row in 0..rows {
            for _column in 0..columns {
                let card = deck.pop().ok_or(BoardError::Integrity {
                    expected,
                    actual: cells.len(),
                })?;
                cells.push(card);
            }
        }

        let dealt = cells.len();
        Board::from_cells(rows, columns, cells).ok_or(BoardError::Integrity {
            expected,
            actual: dealt,
        })
    }

    /// Generate `count` independent games from forks of this generator's RNG.
    ///
    /// Fails on the first invalid game; dimensions are the same for all.
    pub fn create_games(
        &mut self,
        rows: i64,
        columns: i64,
        count: usize,
    ) -> Result<Vec<GameResult>> {
        self.validate_logged(rows, columns)?;
        (0..count)
            .map(|_| {
                let rng = self.rng.fork();
                BoardGenerator::with_rng(self.config.clone(), rng).create_game(rows, columns)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::{Mutex, Once};

    /// Collects warnings so tests can check what the generator logs.
    struct CaptureLogger {
        lines: Mutex<Vec<String>>,
    }

    impl log::Log for CaptureLogger {
        fn enabled(&self, metadata: &log::Metadata) -> bool {
            metadata.level() <= log::Level::Warn
        }

        fn log(&self, record: &log::Record) {
            if self.enabled(record.metadata()) {
                if let Ok(mut lines) = self.lines.lock() {
                    lines.push(record.args().to_string());
                }
            }
        }

        fn flush(&self) {}
    }

    static LOGGER: CaptureLogger = CaptureLogger {
        lines: Mutex::new(Vec::new()),
    };
    static INIT_LOGGER: Once = Once::new();

    /// Warnings logged so far that mention `needle`.
    fn warnings_containing(needle: &str) -> usize {
        INIT_LOGGER.call_once(|| {
            log::set_logger(&LOGGER).unwrap();
            log::set_max_level(log::LevelFilter::Warn);
        });
        LOGGER
            .lines
            .lock()
            .unwrap()
            .iter()
            .filter(|line| line.contains(needle))
            .count()
    }

    fn dimension_error(rows: i64, columns: i64) -> DimensionError {
        match validate_dimensions(rows, columns) {
            Err(BoardError::InvalidDimensions(e)) => e,
            other => panic!(
                "expected dimension error for {}x{}, got {:?}",
                rows, columns, other
            ),
        }
    }

    #[test]
    fn test_validation_order() {
        assert_eq!(dimension_error(0, 0), DimensionError::RowsTooSmall);
        assert_eq!(dimension_error(-3, 99), DimensionError::RowsTooSmall);
        assert_eq!(dimension_error(7, 0), DimensionError::RowsTooLarge { max: 6 });
        assert_eq!(dimension_error(3, 0), DimensionError::ColumnsTooSmall);
        assert_eq!(dimension_error(3, 7), DimensionError::ColumnsTooLarge { max: 6 });
        assert_eq!(dimension_error(3, 3), DimensionError::BothOdd);
        assert_eq!(dimension_error(5, 5), DimensionError::BothOdd);
    }

    #[test]
    fn test_validation_accepts_one_even_side() {
        assert!(validate_dimensions(1, 6).is_ok());
        assert!(validate_dimensions(6, 1).is_ok());
        assert!(validate_dimensions(3, 4).is_ok());
        assert!(validate_dimensions(6, 6).is_ok());
    }

    #[test]
    fn test_validation_extreme_inputs() {
        assert_eq!(dimension_error(i64::MIN, 2), DimensionError::RowsTooSmall);
        assert_eq!(
            dimension_error(i64::MAX, 2),
            DimensionError::RowsTooLarge { max: 6 }
        );
        assert_eq!(
            dimension_error(2, i64::MAX),
            DimensionError::ColumnsTooLarge { max: 6 }
        );
    }

    #[test]
    fn test_custom_limits() {
        let config = BoardConfig::new().with_max_columns(8).with_seed(1);
        let generator = BoardGenerator::with_config(config);
        assert!(generator.validate_dimensions(2, 8).is_ok());
        assert_eq!(
            generator.validate_dimensions(2, 9),
            Err(BoardError::from(DimensionError::ColumnsTooLarge { max: 8 }))
        );
    }

    #[test]
    fn test_unbounded_limits_reject_overflowing_boards() {
        let config = BoardConfig::new()
            .with_max_rows(i64::MAX)
            .with_max_columns(i64::MAX)
            .with_seed(1);
        let mut generator = BoardGenerator::with_config(config);

        let huge = 1i64 << 32;
        assert_eq!(
            generator.create_game(huge, huge),
            Err(BoardError::from(DimensionError::TooManyCells {
                rows: huge,
                columns: huge
            }))
        );
        // Product fits in i64 but the pair count does not fit a CardId.
        assert!(generator.create_game(1 << 20, 1 << 20).is_err());
        assert!(generator.create_board(i64::MAX, 2, &[]).is_err());

        let game = generator.create_game(8, 10).unwrap();
        assert_eq!(game.unique_cards.len(), 40);
    }

    #[test]
    fn test_rejections_are_warned_once() {
        warnings_containing("");

        let mut generator = BoardGenerator::new(42);
        assert!(generator.create_board(-17, 2, &[]).is_err());
        assert_eq!(warnings_containing("rejected -17x2 board"), 1);

        assert!(generator.create_game(-19, 2).is_err());
        assert_eq!(warnings_containing("rejected -19x2 board"), 1);
    }

    #[test]
    fn test_unique_cards() {
        assert_eq!(
            get_unique_cards(3),
            vec![CardId::new(0), CardId::new(1), CardId::new(2)]
        );
        assert!(get_unique_cards(0).is_empty());
        assert!(get_unique_cards(-4).is_empty());
    }

    #[test]
    fn test_create_board_pairs_every_card() {
        let mut generator = BoardGenerator::new(42);
        let cards = get_unique_cards(6);
        let board = generator.create_board(3, 4, &cards).unwrap();

        assert_eq!(board.rows(), 3);
        assert_eq!(board.columns(), 4);
        for card in cards {
            assert_eq!(board.count_of(card), 2);
        }
    }

    #[test]
    fn test_create_board_integrity_mismatch() {
        let mut generator = BoardGenerator::new(42);
        let err = generator.create_board(2, 2, &get_unique_cards(3)).unwrap_err();

        assert_eq!(err, BoardError::Integrity { expected: 4, actual: 6 });
        assert!(!err.is_user_error());
    }

    #[test]
    fn test_create_board_validates_before_integrity() {
        let mut generator = BoardGenerator::new(42);
        let err = generator.create_board(3, 3, &get_unique_cards(1)).unwrap_err();
        assert_eq!(err, BoardError::from(DimensionError::BothOdd));
    }

    #[test]
    fn test_seeded_generator_is_reproducible() {
        let first = BoardGenerator::new(7).create_game(6, 6).unwrap();
        let second = BoardGenerator::new(7).create_game(6, 6).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_seed_is_exposed() {
        let generator = BoardGenerator::from_entropy();
        let seed = generator.seed();
        let mut replay = BoardGenerator::new(seed);
        let mut original = generator;
        assert_eq!(
            original.create_game(4, 4).unwrap(),
            replay.create_game(4, 4).unwrap()
        );
    }

    #[test]
    fn test_create_games_forks() {
        let mut generator = BoardGenerator::new(3);
        let games = generator.create_games(4, 6, 5).unwrap();

        assert_eq!(games.len(), 5);
        assert!(games.iter().any(|g| g.board != games[0].board));

        let again = BoardGenerator::new(3).create_games(4, 6, 5).unwrap();
        assert_eq!(games, again);
    }

    #[test]
    fn test_create_games_rejects_bad_dimensions() {
        let mut generator = BoardGenerator::new(3);
        assert!(generator.create_games(5, 5, 2).is_err());
    }
}
