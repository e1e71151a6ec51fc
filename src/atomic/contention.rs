/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Retry Contention Accounting
//!
//! Counts failed compare-exchange attempts inside retry loops. With the
//! `tracing` feature the count is reported in a `trace!` event when a loop
//! settles after retrying or aborts. Without it every method is empty and
//! the type has no fields.
//!
//! # Author
//!
//! Haixing Hu

#[derive(Debug, Default)]
pub(crate) struct Contention {
    #[cfg(feature = "tracing")]
    retries: u64,
}

impl Contention {
    /// Records one failed compare-exchange attempt.
    #[inline(always)]
    pub(crate) fn retry(&mut self) {
        #[cfg(feature = "tracing")]
        {
            self.retries += 1;
        }
    }

    /// The loop stored its candidate over `previous`.
    #[cfg(feature = "tracing")]
    pub(crate) fn settled(&self, previous: i64) {
        if self.retries > 0 {
            tracing::trace!(
                retries = self.retries,
                previous,
                "compare-exchange loop settled under contention"
            );
        }
    }

    #[cfg(not(feature = "tracing"))]
    #[inline(always)]
    pub(crate) fn settled(&self, _previous: i64) {}

    /// The loop gave up without writing after observing `observed`.
    #[cfg(feature = "tracing")]
    pub(crate) fn aborted(&self, observed: i64) {
        tracing::trace!(
            retries = self.retries,
            observed,
            "compare-exchange loop aborted without writing"
        );
    }

    #[cfg(not(feature = "tracing"))]
    #[inline(always)]
    pub(crate) fn aborted(&self, _observed: i64) {}
}
