use log::warn;
use veloplot_records::RaceRecord;
use veloplot_records::error::RecordError;

/// Skips the records that could not be normalized, logging why.
pub(super) struct ErrorHandlingIter<I> {
    iter: I,
    skipped: usize,
}

impl<I> ErrorHandlingIter<I>
where
    I: Iterator<Item = Result<RaceRecord, RecordError>>,
{
    pub fn new(iter: I) -> ErrorHandlingIter<I> {
        Self { iter, skipped: 0 }
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

impl<I> Iterator for ErrorHandlingIter<I>
where
    I: Iterator<Item = Result<RaceRecord, RecordError>>,
{
    type Item = RaceRecord;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.iter.next() {
                Some(Ok(item)) => return Some(item),
                Some(Err(err)) => {
                    warn!("skipping a race record: {err}");
                    self.skipped += 1;
                    continue;
                }
                None => return None,
            }
        }
    }
}
