use crate::*;

/// True once every cell without a mine has been revealed.
pub fn is_solved(board: &Board, state: &RevealState) -> bool {
    iter_coords(board.size()).all(|coords| board.contains_mine(coords) || state.is_revealed(coords))
}

/// Safe cells still hidden from the player.
pub fn hidden_safe_cells<'a>(
    board: &'a Board,
    state: &'a RevealState,
) -> impl Iterator<Item = Coord2> + 'a {
    iter_coords(board.size())
        .filter(move |&coords| !board.contains_mine(coords) && !state.is_revealed(coords))
}
