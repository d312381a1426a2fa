/*!
`switchboard` is the filter and rank engine behind a fuzzy tab
switcher: it owns a shared list of candidate tabs, re-runs the
matching pipeline over a snapshot of that list whenever the query or
the list changes, and hands the UI a ranked result list plus per
title highlight masks.

The engine never talks to the browser itself. Tab enumeration is
asynchronous and owned by the caller: await the snapshot, feed it
through an [`Injector`], and call [`Switchboard::refilter`] once the
feed completed. Matching itself is synchronous and pure (see the
`switchboard_matcher` crate), so there is nothing to cancel when a
newer keystroke supersedes a result list; the old list is simply
dropped.
*/

use std::cmp::Reverse;
use std::ops::Deref;
use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};
use rayon::prelude::*;

mod items;


pub use crate::items::{Injector, Item};
pub use switchboard_matcher::{Matcher, MatcherConfig, Pattern, Term};

/// A scored candidate, pointing back into the snapshot that
/// produced it.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub struct Match {
    pub score: i32,
    pub idx: u32,
}

/// The filter and rank engine behind the tab switcher popup.
///
/// Candidates arrive through an [`Injector`]; every keystroke the UI
/// calls [`update_query`](Self::update_query) followed by
/// [`refilter`](Self::refilter) and renders
/// [`matches`](Self::matches) against [`items`](Self::items).
pub struct Switchboard<T> {
    items: Arc<Mutex<Vec<Item<T>>>>,
    notify: Arc<dyn Fn() + Sync + Send>,
    matcher: Matcher,
    pattern: Pattern,
    matches: Vec<Match>,
}

impl<T: Sync + Send> Switchboard<T> {
    /// Creates an engine. `notify` fires whenever the candidate list
    /// changes under the engine (tabs injected or cleared); the UI
    /// reacts by refiltering and re-rendering.
    pub fn new(notify: Arc<dyn Fn() + Sync + Send>) -> Self {
        Switchboard {
            items: Arc::new(Mutex::new(Vec::new())),
            notify,
            matcher: Matcher::default(),
            pattern: Pattern::default(),
            matches: Vec::new(),
        }
    }

    /// Returns a handle for feeding candidates into the engine from
    /// the (asynchronous) tab enumeration.
    pub fn injector(&self) -> Injector<T> {
        Injector::new(self.items.clone(), self.notify.clone())
    }

    /// Replaces the current query. Cheap; the work happens in
    /// [`refilter`](Self::refilter).
    pub fn update_query(&mut self, query: &str) {
        self.pattern.reparse(query);
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Runs the full pipeline over the current candidate snapshot:
    /// filter, score, sort. Scoring runs in parallel; the sort
    /// breaks score ties by snapshot index so equal scores keep
    /// their insertion order across re-renders. Every call computes
    /// a fresh result list that supersedes the previous one.
    pub fn refilter(&mut self) {
        let items = self.items.lock();
        self.matches.clear();
        if self.pattern.is_empty() {
            // show all: insertion order, no preference
            self.matches
                .extend((0..items.len() as u32).map(|idx| Match { score: 0, idx }));
            return;
        }
        let config = self.matcher.config;
        let pattern = &self.pattern;
        self.matches.par_extend(
            items
                .par_iter()
                .enumerate()
                .map_init(
                    || Matcher::new(config),
                    |matcher, (idx, item)| {
                        let score = pattern.score(&item.title, matcher)?;
                        Some(Match {
                            score,
                            idx: idx as u32,
                        })
                    },
                )
                .filter_map(|match_| match_),
        );
        drop(items);
        self.matches
            .par_sort_unstable_by_key(|match_| (Reverse(match_.score), match_.idx));
    }

    /// The ranked matches computed by the last
    /// [`refilter`](Self::refilter) call, best first.
    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    /// Borrows the current candidate snapshot; matches index into
    /// this slice via [`Match::idx`]. Holding the returned guard
    /// blocks injection, so resolve the matches and let it go.
    pub fn items(&self) -> impl Deref<Target = [Item<T>]> + '_ {
        MutexGuard::map(self.items.lock(), |items| items.as_mut_slice())
    }

    /// Computes the highlight mask for one matched candidate: one
    /// entry per title char, `true` where the char should render
    /// emphasized. See [`Pattern::highlight`] for the occurrence
    /// marking semantics.
    ///
    /// A match whose snapshot was cleared since the last refilter no
    /// longer points at anything; the mask comes back empty.
    pub fn highlight(&mut self, match_: Match, mask: &mut Vec<bool>) {
        let items = self.items.lock();
        let Some(item) = items.get(match_.idx as usize) else {
            mask.clear();
            return;
        };
        self.pattern
            .highlight(&item.title, &mut self.matcher, mask);
    }
}
