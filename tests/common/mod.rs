// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use tracing_subscriber::EnvFilter;
use word_lattice::{Entry, HashMapVocabulary, Input, Lattice, Node, Path};

/// Install a test subscriber, honouring `RUST_LOG`. Safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// The three fragments of the railway journey Hakata - Tosu - Omuta - Kumamoto.
pub const RAILWAY_INPUTS: [&str; 3] = ["[HakataTosu]", "[TosuOmuta]", "[OmutaKumamoto]"];

/// Trains between Hakata and Kumamoto.
///
/// Input keys are sections of line; entry keys are the stations a train runs
/// between, and the entry value is the train. Node costs are fares, connection
/// costs are transfer penalties. `None` is BOS/EOS.
pub fn railway_vocabulary() -> HashMapVocabulary {
    HashMapVocabulary::new(
        vec![
            (
                Input::from("[HakataTosu][TosuOmuta][OmutaKumamoto]"),
                vec![
                    Entry::new("Hakata-Tosu-Omuta-Kumamoto", "mizuho", 3670),
                    Entry::new("Hakata-Tosu-Omuta-Kumamoto", "sakura", 2620),
                    Entry::new("Hakata-Tosu-Omuta-Kumamoto", "tsubame", 2390),
                ],
            ),
            (
                Input::from("[HakataTosu][TosuOmuta]"),
                vec![
                    Entry::new("Hakata-Tosu-Omuta", "ariake", 2150),
                    Entry::new("Hakata-Tosu-Omuta", "rapid811", 1310),
                ],
            ),
            (
                Input::from("[HakataTosu]"),
                vec![
                    Entry::new("Hakata-Tosu", "kamome", 840),
                    Entry::new("Hakata-Tosu", "local415", 570),
                ],
            ),
            (
                Input::from("[TosuOmuta]"),
                vec![Entry::new("Tosu-Omuta", "local813", 860)],
            ),
            (
                Input::from("[TosuOmuta][OmutaKumamoto]"),
                vec![Entry::new("Tosu-Omuta-Kumamoto", "local815", 1680)],
            ),
            (
                Input::from("[OmutaKumamoto]"),
                vec![Entry::new("Omuta-Kumamoto", "local817", 950)],
            ),
        ],
        [
            (None, Some("Hakata-Tosu-Omuta-Kumamoto"), 600),
            (None, Some("Hakata-Tosu-Omuta"), 700),
            (None, Some("Hakata-Tosu"), 800),
            (None, None, 8000),
            (Some("Hakata-Tosu"), Some("Tosu-Omuta-Kumamoto"), 500),
            (Some("Hakata-Tosu"), Some("Tosu-Omuta"), 600),
            (Some("Hakata-Tosu"), None, 6000),
            (Some("Hakata-Tosu-Omuta"), Some("Omuta-Kumamoto"), 200),
            (Some("Hakata-Tosu-Omuta"), None, 2000),
            (Some("Tosu-Omuta"), Some("Omuta-Kumamoto"), 300),
            (Some("Tosu-Omuta"), None, 3000),
            (Some("Hakata-Tosu-Omuta-Kumamoto"), None, 400),
            (Some("Tosu-Omuta-Kumamoto"), None, 500),
            (Some("Omuta-Kumamoto"), None, 600),
        ]
        .into_iter()
        .map(|(from, to, cost)| ((from.map(Input::from), to.map(Input::from)), cost)),
    )
}

/// A lattice with every railway fragment pushed.
pub fn railway_lattice(vocabulary: &HashMapVocabulary) -> Lattice<'_> {
    let mut lattice = Lattice::new(vocabulary);
    for fragment in RAILWAY_INPUTS {
        lattice
            .push_back(Input::from(fragment))
            .expect("every railway fragment has entries");
    }
    lattice
}

/// The node whose value is `name`.
pub fn node_named<'v>(lattice: &Lattice<'v>, name: &str) -> Node<'v> {
    (0..lattice.step_count())
        .flat_map(|step| lattice.nodes_at(step).expect("step in range"))
        .find(|node| node.value_as::<&'static str>() == Some(&name))
        .cloned()
        .unwrap_or_else(|| panic!("no node named {name}"))
}

/// The train names along a path.
pub fn names(path: &Path<'_>) -> Vec<&'static str> {
    path.nodes()
        .iter()
        .filter_map(|node| node.value_as::<&'static str>().copied())
        .collect()
}
