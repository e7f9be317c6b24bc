//! Per-question answer reading.
//!
//! Every [`AnswerCollector::collect`] call spawns a task that reads exactly one
//! line. The task owns the input while it reads and hands it back with the
//! answer; aborting the task through [`PendingAnswer::cancel`] gives up both.

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::task::JoinHandle;

/// What a collection produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// A line of input with surrounding whitespace removed.
    Line(String),
    /// The input reached end of stream or failed.
    Closed,
}

pub struct AnswerCollector<R> {
    input: Option<R>,
    closed: bool,
}

/// Single-slot handle to an in-flight collection.
pub struct PendingAnswer<R> {
    slot: Slot<R>,
}

enum Slot<R> {
    Reading(JoinHandle<(R, Answer)>),
    Closed,
}

impl<R> AnswerCollector<R>
where
    R: AsyncBufRead + Unpin + Send + 'static,
{
    pub fn new(input: R) -> Self {
        Self {
            input: Some(input),
            closed: false,
        }
    }

    /// Start reading one line without waiting for it.
    ///
    /// Once the input has closed, or has been given up by a cancelled
    /// collection, this resolves to [`Answer::Closed`] without reading.
    pub fn collect(&mut self) -> PendingAnswer<R> {
        let slot = match self.input.take() {
            Some(input) if !self.closed => Slot::Reading(tokio::spawn(read_answer(input))),
            input => {
                self.input = input;
                Slot::Closed
            }
        };
        PendingAnswer { slot }
    }

    /// Wait for `pending` to deliver.
    ///
    /// Cancel-safe: if this future is dropped before completion the
    /// collection keeps running and can still be received or cancelled.
    pub async fn receive(&mut self, pending: &mut PendingAnswer<R>) -> Answer {
        let handle = match &mut pending.slot {
            Slot::Reading(handle) => handle,
            Slot::Closed => return Answer::Closed,
        };

        let answer = match handle.await {
            Ok((input, answer)) => {
                self.input = Some(input);
                answer
            }
            Err(err) => {
                log::warn!("answer collection did not complete: {}", err);
                Answer::Closed
            }
        };
        pending.slot = Slot::Closed;

        if answer == Answer::Closed && !self.closed {
            log::warn!("input stream closed; remaining answers count as incorrect");
            self.closed = true;
        }
        answer
    }
}

impl<R> PendingAnswer<R> {
    /// Abandon the collection. Its result, if any, is dropped unseen.
    pub fn cancel(self) {
        if let Slot::Reading(handle) = self.slot {
            handle.abort();
        }
    }
}

async fn read_answer<R>(mut input: R) -> (R, Answer)
where
    R: AsyncBufRead + Unpin,
{
    // Bytes that aren't UTF-8 still make a (wrong) answer, not a closed stream.
    let mut line = Vec::new();
    let answer = match input.read_until(b'\n', &mut line).await {
        Ok(0) => Answer::Closed,
        Ok(_) => Answer::Line(String::from_utf8_lossy(&line).trim().to_string()),
        Err(err) => {
            log::warn!("failed to read answer: {}", err);
            Answer::Closed
        }
    };
    (input, answer)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::io::{AsyncWriteExt, BufReader, duplex};
    use tokio::time;

    use super::*;

    #[tokio::test]
    async fn test_collects_lines_in_order() {
        let mut collector = AnswerCollector::new(BufReader::new(&b"10\n  2  \n"[..]));

        let mut first = collector.collect();
        assert_eq!(collector.receive(&mut first).await, Answer::Line("10".into()));

        let mut second = collector.collect();
        assert_eq!(collector.receive(&mut second).await, Answer::Line("2".into()));
    }

    #[tokio::test]
    async fn test_end_of_stream_delivers_closed() {
        let mut collector = AnswerCollector::new(BufReader::new(&b"only\n"[..]));

        let mut pending = collector.collect();
        assert_eq!(collector.receive(&mut pending).await, Answer::Line("only".into()));

        for _ in 0..3 {
            let mut pending = collector.collect();
            assert_eq!(collector.receive(&mut pending).await, Answer::Closed);
        }
    }

    #[tokio::test]
    async fn test_invalid_utf8_line_is_an_answer() {
        let mut collector = AnswerCollector::new(BufReader::new(&b"\xff\n2\n"[..]));

        let mut garbled = collector.collect();
        assert_eq!(
            collector.receive(&mut garbled).await,
            Answer::Line("\u{fffd}".into())
        );

        let mut next = collector.collect();
        assert_eq!(collector.receive(&mut next).await, Answer::Line("2".into()));
    }

    #[tokio::test]
    async fn test_last_line_without_newline() {
        let mut collector = AnswerCollector::new(BufReader::new(&b"42"[..]));
        let mut pending = collector.collect();
        assert_eq!(collector.receive(&mut pending).await, Answer::Line("42".into()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_receive_survives_being_dropped() {
        let (mut writer, reader) = duplex(64);
        let mut collector = AnswerCollector::new(BufReader::new(reader));
        let mut pending = collector.collect();

        let early = time::timeout(Duration::from_secs(1), collector.receive(&mut pending)).await;
        assert!(early.is_err());

        writer.write_all(b"late\n").await.unwrap();
        assert_eq!(collector.receive(&mut pending).await, Answer::Line("late".into()));
    }

    #[tokio::test]
    async fn test_cancel_gives_up_input() {
        let (mut writer, reader) = duplex(64);
        let mut collector = AnswerCollector::new(BufReader::new(reader));

        collector.collect().cancel();
        // Whatever arrives now is never read by anyone.
        writer.write_all(b"ignored\n").await.unwrap();

        let mut next = collector.collect();
        assert_eq!(collector.receive(&mut next).await, Answer::Closed);
    }
}
