use crate::game::GameState;
use crate::position::Coordinate;

/// Encode an in-range coordinate as a row-major action index.
pub fn encode_coordinate(coord: &Coordinate, board_width: usize, board_height: usize) -> Option<usize> {
    coord
        .is_valid(board_width, board_height)
        .then(|| coord.to_index(board_width))
}

/// Inverse of [`encode_coordinate`].
pub fn decode_action(action: usize, board_width: usize, board_height: usize) -> Option<Coordinate> {
    if action >= total_actions(board_width, board_height) {
        return None;
    }
    Some(Coordinate::from_index(action, board_width))
}

pub fn total_actions(board_width: usize, board_height: usize) -> usize {
    board_width * board_height
}

/// Action indices of every empty cell, ascending. Empty once the game is over.
pub fn legal_action_indices(state: &GameState) -> Vec<usize> {
    if state.is_over() {
        return Vec::new();
    }
    let mut actions = state.board().empty_cells().to_vec();
    actions.sort_unstable();
    actions
}
