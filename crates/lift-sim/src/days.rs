//! Repeated independent days.

use lift_core::SimConfig;
use lift_schedule::{ArrivalGenerator, ScheduleResult};

use crate::{DayMetrics, NoopObserver, SimBuilder, SimResult};

/// Run days `0..days`, each on a freshly built [`Sim`][crate::Sim] with its
/// own generator from `make_generator(day)`.
///
/// Nothing carries over between days except the returned metrics, which are
/// in day order.  With the `parallel` feature the days run on Rayon's thread
/// pool; the results are identical either way.
pub fn run_days<G, F>(config: &SimConfig, days: u32, make_generator: F) -> SimResult<Vec<DayMetrics>>
where
    G: ArrivalGenerator + Send,
    F: Fn(u32) -> ScheduleResult<G> + Sync,
{
    let run_one = |day: u32| -> SimResult<DayMetrics> {
        let generator = make_generator(day)?;
        SimBuilder::new(config.clone(), generator)
            .day(day)
            .build()?
            .run(&mut NoopObserver)
    };

    #[cfg(not(feature = "parallel"))]
    {
        (0..days).map(run_one).collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        // Indexed parallel iterators collect in index order.
        (0..days).into_par_iter().map(run_one).collect()
    }
}
