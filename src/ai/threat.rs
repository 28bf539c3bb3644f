use rand::rngs::StdRng;
use tracing::trace;

use crate::ai::random::random_move;
use crate::board::{Board, NEIGHBOR_OFFSETS};
use crate::player::Mark;
use crate::position::Coordinate;
use crate::speculate::Speculation;
use crate::win::is_win_at;

/// First empty cell within `radius` of `around` where `mark` would complete a run.
///
/// Cells are scanned row by row over the square window centred on `around`.
/// Only the window is examined, so the cost does not depend on board size.
pub fn find_winning_cell(
    board: &mut Board,
    around: &Coordinate,
    mark: Mark,
    run_length: usize,
    radius: usize,
) -> Option<Coordinate> {
    let r = radius as i64;
    for dr in -r..=r {
        for dc in -r..=r {
            let Some(idx) = board.resolve(&around.offset(dc, dr)) else {
                continue;
            };
            if !board.get_index(idx).is_empty() {
                continue;
            }

            let guard = Speculation::place_index(board, idx, mark);
            let coord = guard.coordinate();
            if is_win_at(&guard, &coord, mark, run_length) {
                return Some(coord);
            }
        }
    }
    None
}

/// Block the opponent's immediate win near their last move; otherwise play
/// next to that move; otherwise play anywhere.
pub fn threat_move(
    board: &mut Board,
    last_opponent_move: Option<Coordinate>,
    mark: Mark,
    run_length: usize,
    radius: usize,
    rng: &mut StdRng,
) -> Option<Coordinate> {
    let Some(last) = last_opponent_move else {
        return random_move(board, rng);
    };

    if let Some(block) = find_winning_cell(board, &last, mark.opposite(), run_length, radius) {
        trace!(%block, "blocking threat");
        return Some(block);
    }

    NEIGHBOR_OFFSETS
        .iter()
        .filter_map(|&(dc, dr)| board.canonical(&last.offset(dc, dr)))
        .find(|coord| board.get(coord).is_empty())
        .or_else(|| random_move(board, rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::AddressingMode;
    use rand::SeedableRng;

    fn place(board: &mut Board, cells: &[(i64, i64)], mark: Mark) {
        for &(c, r) in cells {
            board.set(&Coordinate::new(c, r), mark).unwrap();
        }
    }

    #[test]
    fn test_forced_block() {
        let mut board = Board::new(10, 10, AddressingMode::Bounded);
        place(&mut board, &[(1, 1), (1, 2), (1, 3), (1, 4)], Mark::O);
        place(&mut board, &[(5, 5), (6, 6), (7, 7)], Mark::X);
        let before = board.clone();
        let mut rng = StdRng::seed_from_u64(0);

        let block = threat_move(
            &mut board,
            Some(Coordinate::new(1, 4)),
            Mark::X,
            5,
            2,
            &mut rng,
        )
        .unwrap();
        assert!(block == Coordinate::new(1, 5) || block == Coordinate::new(1, 0));
        assert_eq!(board, before);
        assert_eq!(board.empty_count(), before.empty_count());
    }

    #[test]
    fn test_forced_block_from_other_end() {
        let mut board = Board::new(10, 10, AddressingMode::Bounded);
        place(&mut board, &[(1, 1), (1, 2), (1, 3), (1, 4)], Mark::O);
        let mut rng = StdRng::seed_from_u64(0);
        let block = threat_move(&mut board, Some(Coordinate::new(1, 1)), Mark::X, 5, 2, &mut rng);
        assert_eq!(block, Some(Coordinate::new(1, 0)));
    }

    #[test]
    fn test_no_threat_plays_adjacent() {
        let mut board = Board::new(10, 10, AddressingMode::Bounded);
        place(&mut board, &[(4, 4)], Mark::X);
        let mut rng = StdRng::seed_from_u64(0);
        let coord = threat_move(&mut board, Some(Coordinate::new(4, 4)), Mark::O, 5, 2, &mut rng);
        assert_eq!(coord, Some(Coordinate::new(3, 3)));
    }

    #[test]
    fn test_adjacent_skips_occupied_and_off_board() {
        let mut board = Board::new(10, 10, AddressingMode::Bounded);
        place(&mut board, &[(0, 0)], Mark::X);
        place(&mut board, &[(0, 1)], Mark::O);
        let mut rng = StdRng::seed_from_u64(0);
        let coord = threat_move(&mut board, Some(Coordinate::new(0, 0)), Mark::O, 5, 2, &mut rng);
        assert_eq!(coord, Some(Coordinate::new(1, 0)));
    }

    #[test]
    fn test_threat_across_toroidal_seam() {
        let mut board = Board::new(6, 6, AddressingMode::Toroidal);
        place(&mut board, &[(4, 3), (5, 3), (0, 3), (1, 3)], Mark::X);
        let mut rng = StdRng::seed_from_u64(0);
        let block = threat_move(&mut board, Some(Coordinate::new(0, 3)), Mark::O, 5, 2, &mut rng);
        // Either end of the wrapped run; (2, 3) and (3, 3) are the same gap
        assert!(matches!(block, Some(c) if c == Coordinate::new(2, 3) || c == Coordinate::new(3, 3)));
    }

    #[test]
    fn test_radius_limits_search() {
        let mut board = Board::new(20, 20, AddressingMode::Bounded);
        place(&mut board, &[(10, 0), (11, 0), (12, 0), (13, 0)], Mark::X);
        assert_eq!(
            find_winning_cell(&mut board, &Coordinate::new(0, 10), Mark::X, 5, 2),
            None
        );
        assert_eq!(
            find_winning_cell(&mut board, &Coordinate::new(13, 0), Mark::X, 5, 2),
            Some(Coordinate::new(14, 0))
        );
    }

    #[test]
    fn test_no_last_move_plays_randomly() {
        let mut board = Board::new(4, 4, AddressingMode::Bounded);
        let mut rng = StdRng::seed_from_u64(2);
        let coord = threat_move(&mut board, None, Mark::O, 3, 2, &mut rng).unwrap();
        assert!(board.contains(&coord));
    }
}
