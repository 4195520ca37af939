use std::sync::{
    atomic::{AtomicBool, Ordering},
    mpsc::{channel, Receiver, Sender},
    Arc,
};

pub fn get_mock_channel<T>() -> (Sender<T>, Receiver<T>) {
    channel::<T>()
}

pub fn get_mock_atomic_bool_pair() -> (Arc<AtomicBool>, Arc<AtomicBool>) {
    let called_1 = Arc::new(AtomicBool::new(false));
    let called_2 = called_1.clone();
    (called_1, called_2)
}

pub fn flag_mock_atomic_bool(value: &AtomicBool) {
    value.store(true, Ordering::Relaxed);
}

pub fn test_mock_atomic_bool(value: &AtomicBool) -> bool {
    value.load(Ordering::Relaxed)
}
