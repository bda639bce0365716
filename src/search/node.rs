//! Search tree nodes.
//!
//! A node exclusively owns its children. Nodes carry no parent link; the
//! recursive evaluator never needs to walk upwards. Only the root is
//! expanded in place. Deeper nodes are built one at a time with `child`
//! and live only while they are being evaluated.

use rustc_hash::FxHashSet;

use crate::core::{Board, Move, Player};
use crate::error::Result;
use crate::rules::RulesOracle;

/// A node in the search tree.
#[derive(Clone, Debug)]
pub struct SearchNode {
    /// Board snapshot at this node.
    pub board: Board,

    /// The move that produced `board` (`None` for the root).
    pub mv: Option<Move>,

    /// Expanded children, in generation order.
    pub children: Vec<SearchNode>,

    /// Legal moves not yet expanded into children.
    pub untried_moves: Vec<Move>,
}

impl SearchNode {
    /// Create a node for `board`.
    pub fn new<O: RulesOracle + ?Sized>(oracle: &O, board: Board, mv: Option<Move>) -> Self {
        let untried_moves = oracle.possible_moves(&board);
        Self {
            board,
            mv,
            children: Vec::new(),
            untried_moves,
        }
    }

    /// Create a root node.
    pub fn root<O: RulesOracle + ?Sized>(oracle: &O, board: Board) -> Self {
        Self::new(oracle, board, None)
    }

    /// Build the node reached when `player` plays `mv`, without attaching it.
    ///
    /// The child differs from this node's board in exactly the one cell
    /// its move occupies.
    pub fn child<O: RulesOracle + ?Sized>(
        &self,
        oracle: &O,
        mv: Move,
        player: Player,
    ) -> Result<SearchNode> {
        let board = self.board.place(mv, player)?;
        Ok(SearchNode::new(oracle, board, Some(mv)))
    }

    /// Expand `moves` into children where `player` places a stone.
    ///
    /// Expanded moves leave `untried_moves`.
    pub fn expand<O: RulesOracle + ?Sized>(
        &mut self,
        oracle: &O,
        moves: &[Move],
        player: Player,
    ) -> Result<()> {
        self.children.reserve(moves.len());
        for &mv in moves {
            let child = self.child(oracle, mv, player)?;
            self.children.push(child);
        }

        let expanded: FxHashSet<Move> = moves.iter().copied().collect();
        self.untried_moves.retain(|m| !expanded.contains(m));
        Ok(())
    }

    /// Moves of the expanded children, in order.
    pub fn child_moves(&self) -> Vec<Move> {
        self.children.iter().filter_map(|c| c.mv).collect()
    }

    /// Check if any legal moves are unexpanded.
    #[must_use]
    pub fn has_untried(&self) -> bool {
        !self.untried_moves.is_empty()
    }

    /// Number of nodes in this subtree, including `self`.
    #[must_use]
    pub fn subtree_size(&self) -> usize {
        1 + self.children.iter().map(SearchNode::subtree_size).sum::<usize>()
    }
}
