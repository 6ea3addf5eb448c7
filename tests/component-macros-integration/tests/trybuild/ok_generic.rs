use di_common::{Initializable, Inject, Injectable};
use std::sync::Arc;

#[derive(Injectable)]
struct Holder<T: Send + Sync + 'static> {
    #[inject]
    value: Inject<T>,
}

#[derive(Injectable)]
#[injectable(initialize)]
struct Ticker<T: Send + Sync + 'static> {
    #[inject]
    source: Inject<T>,
}

impl<T: Send + Sync + 'static> Initializable for Ticker<T> {
    fn initialize(&self) {}
}

fn main() {
    let holder: Holder<String> = Holder { value: Inject::new() };
    assert_eq!(holder.declared_sites().len(), 1);
    assert!(Arc::new(holder).lifecycle().is_empty());

    let ticker: Ticker<u32> = Ticker { source: Inject::new() };
    assert!(Arc::new(ticker).lifecycle().initialize.is_some());
}
