use fifo_rs::{BasicFifoString, Fifo, FifoArray, FifoString};

fn push_all<F: Fifo<u32>>(fifo: &mut F, values: &[u32]) {
    for v in values {
        fifo.push_back(*v);
    }
}

// Laws every adapter obeys, whatever its storage.
fn fifo_laws<F: Fifo<u32> + Default>() {
    let mut fifo = F::default();
    push_all(&mut fifo, &[10, 20, 30, 40]);
    assert_eq!(fifo.len(), 4);
    assert_eq!(fifo.front(), &10);
    assert_eq!(fifo.back(), &40);

    // pop then unpop is a round trip
    fifo.pop_front();
    fifo.pop_front();
    let (len, front) = (fifo.len(), *fifo.front());
    fifo.pop_front();
    fifo.unpop_front();
    assert_eq!((fifo.len(), *fifo.front()), (len, front));

    // unpop_all brings back every push since the last clear
    fifo.pop_front();
    fifo.unpop_all();
    assert_eq!(fifo.len(), 4);
    assert_eq!(fifo.front(), &10);

    fifo.clear();
    assert!(fifo.is_empty());
    push_all(&mut fifo, &[7]);
    fifo.unpop_all();
    assert_eq!(fifo.len(), 1);
    assert_eq!(fifo.front(), &7);
    assert_eq!(fifo.back(), &7);
}

fn swap_law<F: Fifo<u32> + Default>() {
    let mut a = F::default();
    let mut b = F::default();
    push_all(&mut a, &[1, 2, 3]);
    push_all(&mut b, &[8, 9]);

    fifo_rs::swap(&mut a, &mut b);
    assert_eq!((a.len(), *a.front(), *a.back()), (2, 8, 9));
    assert_eq!((b.len(), *b.front(), *b.back()), (3, 1, 3));

    fifo_rs::swap(&mut a, &mut b);
    assert_eq!((a.len(), *a.front(), *a.back()), (3, 1, 3));
    assert_eq!((b.len(), *b.front(), *b.back()), (2, 8, 9));
}

#[test]
fn array_laws() {
    fifo_laws::<FifoArray<u32, 8>>();
    swap_law::<FifoArray<u32, 8>>();
}

#[test]
fn string_laws() {
    fifo_laws::<BasicFifoString<u32>>();
    swap_law::<BasicFifoString<u32>>();
}

#[test]
fn len_counts_effective_pops() {
    let mut fifo = FifoArray::<u32, 16>::new();
    let mut pushes = 0;
    let mut pops = 0;
    for round in 0..4u32 {
        for i in 0..3 {
            fifo.push_back(round * 3 + i);
            pushes += 1;
        }
        fifo.pop_front();
        pops += 1;
        assert_eq!(fifo.len(), pushes - pops);
    }
    assert_eq!(fifo.front(), &4);
    assert_eq!(fifo.back(), &11);
}

#[test]
fn array_scenario() {
    let mut fifo = FifoArray::<i32, 4>::new();
    fifo.push_back(1);
    fifo.push_back(2);
    fifo.push_back(3);
    assert_eq!(fifo.len(), 3);
    assert_eq!(fifo.front(), &1);
    assert_eq!(fifo.back(), &3);

    fifo.pop_front();
    assert_eq!(fifo.len(), 2);
    assert_eq!(fifo.front(), &2);

    fifo.unpop_front();
    assert_eq!(fifo.len(), 3);
    assert_eq!(fifo.front(), &1);
}

#[test]
fn string_scenario() {
    let mut fifo = FifoString::new();
    for c in "abc".bytes() {
        fifo.push_back(c);
    }
    assert_eq!(fifo.view(), b"abc");

    fifo.pop_front();
    fifo.pop_front();
    assert_eq!(fifo.view(), b"c");
    assert_eq!(fifo.len(), 1);

    fifo.unpop_all();
    assert_eq!(fifo.view(), b"abc");
    assert_eq!(fifo.len(), 3);

    fifo.clear();
    assert_eq!(fifo.len(), 0);
    assert_eq!(fifo.view(), b"");
}

#[test]
fn checked_push_hands_value_back() {
    let mut fifo = FifoArray::<String, 1>::new();
    fifo.try_push_back("first".to_string()).unwrap();

    let err = fifo.try_push_back("second".to_string()).unwrap_err();
    assert_eq!(err.capacity(), 1);
    assert_eq!(err.into_inner(), "second");
    assert_eq!(fifo.front(), "first");
}

#[test]
#[should_panic(expected = "front on empty FifoArray")]
fn array_front_after_clear() {
    let mut fifo = FifoArray::<u32, 2>::new();
    push_all(&mut fifo, &[1]);
    Fifo::clear(&mut fifo);
    Fifo::front(&fifo);
}

#[test]
#[should_panic(expected = "back on empty BasicFifoString")]
fn string_back_after_clear() {
    let mut fifo = BasicFifoString::<u32>::new();
    push_all(&mut fifo, &[1]);
    Fifo::clear(&mut fifo);
    Fifo::back(&fifo);
}

#[test]
#[cfg(feature = "tracing")]
fn init_tracing_is_idempotent() {
    fifo_rs::trace::init_tracing();
    fifo_rs::trace::init_tracing();

    let mut fifo = FifoArray::<u8, 1>::new();
    fifo.push_back(1);
    assert!(fifo.try_push_back(2).is_err());
    fifo.clear();
}
