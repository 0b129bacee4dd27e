use crate::{Game, Position};

/// Play `game` to the end, letting `choose` pick an index into the legal
/// placements each turn. Forced passes are made automatically.
/// Returns the number of placements made.
pub fn play_out<F>(game: &mut Game, mut choose: F) -> usize
where
    F: FnMut(&[Position]) -> usize,
{
    let mut placements = 0;
    while !game.is_finished() {
        let moves = game.board().legal_positions();
        if moves.is_empty() {
            game.try_pass().expect("no legal placement, so passing is allowed");
            continue;
        }
        let mv = moves[choose(&moves) % moves.len()];
        game.play(mv).expect("legal_positions only yields legal placements");
        placements += 1;
    }
    placements
}
