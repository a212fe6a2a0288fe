//! Controls the execution of a word-count run.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use scoped_threadpool::Pool;
use time::OffsetDateTime;

use crate::chunker;
use crate::error::{MrError, Result};
use crate::map::MapPartition;
use crate::mapreducer::MapReducer;
use crate::parameters::MRParameters;
use crate::record_types::{Chunk, Pair, WordCounts};
use crate::reduce;
use crate::shuffle;
use crate::tokenize;

pub struct MRController<'a, MR: MapReducer> {
    params: &'a MRParameters,
    mr: &'a MR,
}

fn panic_reason(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        String::from(*s)
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        String::from("mapper panicked")
    }
}

impl<'a, MR: MapReducer> MRController<'a, MR> {
    /// Create a new run over `text` and execute it immediately. Returns the count of every
    /// distinct word, keyed in order of first appearance.
    pub fn run(mr: &'a MR, params: &'a MRParameters, text: &str) -> Result<WordCounts> {
        params.validate()?;

        let controller = MRController { params, mr };
        let started = OffsetDateTime::now_utc();

        let tokens = tokenize::tokenize(text);
        let chunks = chunker::chunk(&tokens, params.mappers);
        log::debug!("split {} tokens into {} chunks", tokens.len(), chunks.len());

        let pairs = controller.run_map(&chunks)?;
        log::debug!("map phase emitted {} pairs", pairs.len());

        let shuffled = shuffle::shuffle(pairs);
        log::debug!("shuffle phase found {} distinct words", shuffled.len());

        let counts = reduce::reduce(controller.mr, shuffled);
        log::info!("counted {} words ({} distinct) in {} ms",
                   tokens.len(),
                   counts.len(),
                   (OffsetDateTime::now_utc() - started).whole_milliseconds());
        Ok(counts)
    }

    /// Runs one MapPartition per chunk on a pool of `params.mappers` threads. Each job writes
    /// into its own slot; the scope does not return before every job has finished. The first
    /// failed chunk, in chunk order, fails the phase.
    fn run_map(&self, chunks: &[Chunk]) -> Result<Vec<Pair>> {
        let mut pool = Pool::new(self.params.pool_size()?);
        let mut slots: Vec<Option<Result<Vec<Pair>>>> = (0..chunks.len()).map(|_| None).collect();
        let started = OffsetDateTime::now_utc();

        let mr = self.mr;
        pool.scoped(|scope| {
            for (i, (chunk, slot)) in chunks.iter().zip(slots.iter_mut()).enumerate() {
                scope.execute(move || {
                    let result = panic::catch_unwind(AssertUnwindSafe(|| {
                        MapPartition::new(mr, chunk, i).run()
                    }));
                    *slot = Some(match result {
                        Ok(r) => r,
                        Err(payload) => Err(MrError::Worker { chunk: i, reason: panic_reason(payload) }),
                    });
                });
            }
        });

        log::info!("map phase: {} chunks on {} threads in {} ms",
                   chunks.len(),
                   self.params.mappers,
                   (OffsetDateTime::now_utc() - started).whole_milliseconds());

        let mut pairs = Vec::new();
        for (i, slot) in slots.into_iter().enumerate() {
            match slot {
                Some(Ok(mut p)) => pairs.append(&mut p),
                Some(Err(MrError::Worker { reason, .. })) => {
                    return Err(MrError::Worker { chunk: i, reason })
                }
                Some(Err(e)) => return Err(MrError::Worker { chunk: i, reason: e.to_string() }),
                None => {
                    return Err(MrError::Worker {
                        chunk: i,
                        reason: String::from("mapper did not report a result"),
                    })
                }
            }
        }
        Ok(pairs)
    }
}
