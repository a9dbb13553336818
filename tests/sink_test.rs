use fifo_rs::{FifoArray, FifoString};
use futures_util::SinkExt;
use std::future::Future;
use std::marker::PhantomPinned;
use tokio::runtime::Builder;

fn block_on<F: Future>(f: F) -> F::Output {
    let mut builder = Builder::new_current_thread();
    let rt = builder.build().unwrap();

    rt.block_on(f)
}

#[test]
#[cfg_attr(miri, ignore)]
fn array_sink_fills_up() {
    let mut fifo = FifoArray::<u32, 3>::new();

    block_on(async {
        for x in 0..3 {
            fifo.feed(x).await.unwrap();
        }
        fifo.flush().await.unwrap();

        let err = fifo.send(3).await.unwrap_err();
        assert_eq!(err.capacity(), 3);
        assert_eq!(err.to_string(), "push failed because fifo is full (capacity 3)");
    });

    assert_eq!(fifo.as_slice(), &[0, 1, 2]);
}

#[test]
#[cfg_attr(miri, ignore)]
fn string_sink_accepts_everything() {
    let mut fifo = FifoString::new();

    block_on(async {
        for b in b"streamed" {
            fifo.send(*b).await.unwrap();
        }
        fifo.close().await.unwrap();
    });

    fifo.pop_front_n(6);
    assert_eq!(fifo.view(), b"ed");
}

#[test]
#[cfg_attr(miri, ignore)]
fn string_sink_with_pinned_elements() {
    let mut fifo = fifo_rs::BasicFifoString::<PhantomPinned>::new();

    block_on(async {
        fifo.feed(PhantomPinned).await.unwrap();
        fifo.send(PhantomPinned).await.unwrap();
    });

    assert_eq!(fifo.len(), 2);
    fifo.pop_front();
    assert_eq!(fifo.consumed(), 1);
}
