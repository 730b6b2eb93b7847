#[cfg(test)]
pub mod test {
    use anyhow::{anyhow, Result};
    use std::time::Instant;

    use crate::{
        board::{Board, Piece},
        eval::pick_best_move,
        search::{
            alpha_beta, minimax, Algorithm, AI_WIN_VALUE, INFINITY, NEG_INFINITY, PLAYER_WIN_VALUE,
        },
        WIDTH,
    };

    /// Three AI pieces in row 0, columns 0-2, with column 3 open
    fn ai_threat_board() -> Result<Board> {
        let mut board = Board::new();
        for col in 0..3 {
            board.play(col, Piece::Ai)?;
        }
        board.play(0, Piece::Player)?;
        board.play(1, Piece::Player)?;
        board.play(6, Piece::Player)?;
        Ok(board)
    }

    /// A middlegame position with no immediate threats
    fn middlegame_board() -> Result<Board> {
        Board::from_moves("4453354", Piece::Player)
    }

    #[test]
    pub fn empty_board_opens_in_the_center() {
        let result = minimax(&Board::new(), 1, true);
        assert_eq!(result.column, Some(WIDTH / 2));
        assert_eq!(result.value, 3);
        assert_eq!(result.nodes_explored, WIDTH);
    }

    #[test]
    pub fn immediate_win_is_taken() -> Result<()> {
        let board = ai_threat_board()?;
        for depth in 1..=4 {
            let plain = minimax(&board, depth, true);
            let pruned = alpha_beta(&board, depth, NEG_INFINITY, INFINITY, true);

            assert_eq!(plain.column, Some(3), "minimax at depth {}", depth);
            assert_eq!(plain.value, AI_WIN_VALUE, "minimax at depth {}", depth);
            assert_eq!(pruned.column, Some(3), "alpha-beta at depth {}", depth);
            assert_eq!(pruned.value, AI_WIN_VALUE, "alpha-beta at depth {}", depth);
        }
        assert_eq!(pick_best_move(&board, Piece::Ai), Some(3));
        Ok(())
    }

    #[test]
    pub fn immediate_loss_is_found_for_the_minimizer() -> Result<()> {
        let mut board = Board::new();
        for col in 2..5 {
            board.play(col, Piece::Player)?;
        }
        board.play(2, Piece::Ai)?;
        board.play(3, Piece::Ai)?;

        // the human completes row 0 on the left of the run
        let result = minimax(&board, 1, false);
        assert_eq!(result.column, Some(1));
        assert_eq!(result.value, PLAYER_WIN_VALUE);

        let pruned = alpha_beta(&board, 1, NEG_INFINITY, INFINITY, false);
        assert_eq!(pruned.column, result.column);
        assert_eq!(pruned.value, result.value);
        Ok(())
    }

    #[test]
    pub fn pruning_preserves_the_result() -> Result<()> {
        for board in &[middlegame_board()?, ai_threat_board()?] {
            for depth in 1..=6 {
                let start_time = Instant::now();
                let plain = minimax(board, depth, true);
                let minimax_time = Instant::now() - start_time;

                let start_time = Instant::now();
                let pruned = alpha_beta(board, depth, NEG_INFINITY, INFINITY, true);
                let alpha_beta_time = Instant::now() - start_time;

                assert_eq!(plain.column, pruned.column, "column at depth {}", depth);
                assert_eq!(plain.value, pruned.value, "value at depth {}", depth);
                assert!(pruned.total_nodes <= plain.total_nodes);

                println!(
                    "depth {}: minimax {} nodes in {:.3}ms, alpha-beta {} nodes in {:.3}ms",
                    depth,
                    plain.total_nodes,
                    minimax_time.as_secs_f64() * 1000.0,
                    pruned.total_nodes,
                    alpha_beta_time.as_secs_f64() * 1000.0,
                );
            }
        }
        Ok(())
    }

    #[test]
    pub fn pruning_explores_fewer_nodes() -> Result<()> {
        let board = ai_threat_board()?;
        for depth in 2..=4 {
            let plain = minimax(&board, depth, true);
            let pruned = alpha_beta(&board, depth, NEG_INFINITY, INFINITY, true);
            assert!(
                pruned.total_nodes < plain.total_nodes,
                "depth {}: {} >= {}",
                depth,
                pruned.total_nodes,
                plain.total_nodes
            );
            // the root never cuts off, so its own count of children matches
            assert_eq!(pruned.nodes_explored, plain.nodes_explored);
            assert_eq!(plain.nodes_explored, board.valid_columns().len());
        }
        Ok(())
    }

    #[test]
    pub fn cutoff_skips_remaining_columns() {
        let board = Board::new();
        // the maximizer already has 100 elsewhere, and the first reply here
        // scores below that, so the other six columns are never visited
        let pruned = alpha_beta(&board, 2, 100, INFINITY, false);
        let plain = minimax(&board, 2, false);

        assert_eq!(pruned.nodes_explored, 1);
        assert_eq!(pruned.column, Some(0));
        assert_eq!(plain.nodes_explored, WIDTH);
        assert!(pruned.nodes_explored < plain.nodes_explored);
        assert_eq!(pruned.total_nodes, 1 + WIDTH);
    }

    #[test]
    pub fn searches_do_not_touch_the_board() -> Result<()> {
        let board = middlegame_board()?;
        let before = board;
        for algorithm in &[Algorithm::Minimax, Algorithm::AlphaBeta, Algorithm::Greedy] {
            let result = algorithm.search(&board, 3);
            let column = result
                .column
                .ok_or_else(|| anyhow!("{} returned no move", algorithm))?;
            assert!(board.is_valid_column(column));
        }
        assert_eq!(board, before);
        Ok(())
    }

    #[test]
    pub fn search_is_deterministic() -> Result<()> {
        let board = middlegame_board()?;
        let first = minimax(&board, 4, true);
        let second = minimax(&board, 4, true);
        assert_eq!(first.column, second.column);
        assert_eq!(first.value, second.value);
        assert_eq!(first.total_nodes, second.total_nodes);
        Ok(())
    }
}
