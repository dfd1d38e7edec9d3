//! The four-phase IS-MCTS loop: selection, expansion, simulation, backprop.

use std::collections::BTreeMap;

use log::debug;
use more_asserts::assert_gt;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::engine::observable::ObservableGameState;
use crate::engine::state::GameState;
use crate::engine::Move;

use super::determinizer::Determinizer;
use super::evaluator::Evaluator;
use super::information_set::InformationSet;
use super::node::ISMCTSNode;
use super::DEFAULT_EXPLORATION_WEIGHT;

/// Tunables for one [`ISMCTSEngine::search`] call.
#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    pub iterations: u32,
    pub exploration_weight: f64,
    pub verbose: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            iterations: 1000,
            exploration_weight: DEFAULT_EXPLORATION_WEIGHT,
            verbose: false,
        }
    }
}

/// Diagnostics about the root after a search, mirroring what a caller would
/// want to log or assert on in tests.
#[derive(Debug, Clone)]
pub struct SearchStatistics {
    pub total_visits: u32,
    pub num_children: usize,
    pub best_move: Option<Move>,
    pub best_move_visits: u32,
    pub best_move_reward: f64,
    pub info_set_cache_size: usize,
}

/// The search engine. One instance's `tree` can be reused across multiple
/// [`ISMCTSEngine::search`] calls (statistics keep accumulating across
/// information sets that recur), or discarded between moves.
pub struct ISMCTSEngine {
    tree: BTreeMap<InformationSet, ISMCTSNode>,
    config: SearchConfig,
}

impl ISMCTSEngine {
    pub fn new(config: SearchConfig) -> Self {
        ISMCTSEngine {
            tree: BTreeMap::new(),
            config,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Drops all accumulated statistics. Recommended between independent
    /// games so one game's tree doesn't bias the next.
    pub fn clear_cache(&mut self) {
        self.tree.clear();
    }

    /// Runs `config.iterations` IS-MCTS iterations rooted at `observable`
    /// and returns the root's most-visited move (the "robust child").
    /// Returns `None` if `observable` has no legal moves.
    pub fn search(
        &mut self,
        observable: &ObservableGameState,
        rng: &mut impl Rng,
    ) -> (Option<Move>, SearchStatistics) {
        let root_key = InformationSet::new(
            observable.hand(),
            observable.field(),
            observable.cards_played_count(),
        );
        self.tree.entry(root_key.clone()).or_insert_with(ISMCTSNode::new);

        for i in 0..self.config.iterations {
            let determinized = Determinizer::create_determinization(observable, rng);
            self.run_iteration(root_key.clone(), determinized, rng);

            if self.config.verbose && i % 100 == 0 {
                debug!("IS-MCTS iteration {}/{}", i, self.config.iterations);
            }
        }

        let best_move = self.best_move(&root_key);
        let stats = self.statistics(&root_key, best_move);
        (best_move, stats)
    }

    fn run_iteration(&mut self, root_key: InformationSet, mut state: GameState, rng: &mut impl Rng) {
        let mut path = vec![root_key.clone()];
        let mut current_key = root_key;

        loop {
            if state.is_terminal() {
                break;
            }

            let legal = state.legal_moves();
            let (fully_expanded, parent_visits, children) = {
                let node = self
                    .tree
                    .entry(current_key.clone())
                    .or_insert_with(ISMCTSNode::new);
                node.initialize_untried_moves(legal);
                (
                    node.is_fully_expanded(),
                    node.visits(),
                    node.children().clone(),
                )
            };

            if !fully_expanded {
                break;
            }

            let mv = children
                .iter()
                .max_by(|a, b| {
                    let score_a = self
                        .tree
                        .get(a.1)
                        .expect("child info set must have a node")
                        .ucb1_score(parent_visits, self.config.exploration_weight);
                    let score_b = self
                        .tree
                        .get(b.1)
                        .expect("child info set must have a node")
                        .ucb1_score(parent_visits, self.config.exploration_weight);
                    score_a
                        .partial_cmp(&score_b)
                        .expect("ucb1 scores are never NaN")
                })
                .map(|entry| *entry.0)
                .expect("a fully expanded node has at least one child");

            // `mv` was recorded against the determinization that first built
            // this child edge; a different determinization can deal a
            // different replacement card, so the move may not apply to
            // `state`'s actual current hand. That's a normal divergence, not
            // a bug — stop descending and treat the current position as this
            // iteration's leaf instead of forcing the play.
            if !state.play(mv) {
                break;
            }
            current_key = children
                .get(&mv)
                .cloned()
                .expect("selected move must resolve to a child info set");
            path.push(current_key.clone());
        }

        if !state.is_terminal() {
            let node = self
                .tree
                .get_mut(&current_key)
                .expect("node reached during selection must exist in the tree");
            // Similarly, an untried move recorded by an earlier determinization
            // may not apply to this one's hand. Skip stale moves until one
            // plays, or the node runs out of untried moves this iteration.
            while let Some(mv) = node.take_untried_move() {
                if state.play(mv) {
                    let child_key = InformationSet::new(
                        state.hand(),
                        state.field(),
                        state.cards_played_count(),
                    );
                    node.add_child(mv, child_key.clone());
                    self.tree
                        .entry(child_key.clone())
                        .or_insert_with(ISMCTSNode::new);
                    current_key = child_key;
                    path.push(current_key.clone());
                    break;
                }
            }
        }

        let reward = Self::simulate(state, rng);

        for key in &path {
            let node = self
                .tree
                .get_mut(key)
                .expect("every key on the selection path has a node");
            node.update(reward);
            assert_gt!(node.visits(), 0);
        }
    }

    /// Plays `state` to completion with uniformly random legal moves and
    /// scores the result. Deterministic given a deterministic `rng`.
    fn simulate(mut state: GameState, rng: &mut impl Rng) -> f64 {
        while !state.is_terminal() {
            let legal = state.legal_moves();
            let mv = *legal
                .choose(rng)
                .expect("legal_moves is non-empty when not terminal");
            let played = state.play(mv);
            debug_assert!(played, "a move drawn from this state's own legal_moves always plays");
        }
        Evaluator::evaluate(&state)
    }

    /// The robust-child move: the root's child with the most visits, not
    /// the highest average reward.
    fn best_move(&self, root_key: &InformationSet) -> Option<Move> {
        let root = self.tree.get(root_key)?;
        root.children()
            .iter()
            .max_by_key(|entry| self.tree.get(entry.1).map(|n| n.visits()).unwrap_or(0))
            .map(|entry| *entry.0)
    }

    fn statistics(&self, root_key: &InformationSet, best_move: Option<Move>) -> SearchStatistics {
        let root = self.tree.get(root_key);
        let (best_move_visits, best_move_reward) = match (best_move, root) {
            (Some(mv), Some(root)) => match root.children().get(&mv) {
                Some(child_key) => self
                    .tree
                    .get(child_key)
                    .map(|n| (n.visits(), n.average_reward()))
                    .unwrap_or((0, 0.0)),
                None => (0, 0.0),
            },
            _ => (0, 0.0),
        };

        SearchStatistics {
            total_visits: root.map(|n| n.visits()).unwrap_or(0),
            num_children: root.map(|n| n.children().len()).unwrap_or(0),
            best_move,
            best_move_visits,
            best_move_reward,
            info_set_cache_size: self.tree.len(),
        }
    }
}
