use di_common::{Initializable, Injectable, OnInjected, PreInitializable, Provides};
use std::sync::Arc;

trait Weather: Send + Sync {}

#[derive(Default, Injectable)]
#[injectable(pre_initialize, initialize, on_injected, provides(dyn Weather))]
struct Rain;

impl Weather for Rain {}

impl PreInitializable for Rain {
    fn pre_initialize(&self) {}
}

impl Initializable for Rain {
    fn initialize(&self) {}
}

impl OnInjected for Rain {
    fn on_injected(&self) {}
}

fn main() {
    let rain = Arc::new(Rain);
    assert!(rain.as_on_injected().is_some());
    let hooks = Arc::clone(&rain).lifecycle();
    assert_eq!(hooks.phases().len(), 2);
    let _weather: Arc<dyn Weather> = <Rain as Provides<dyn Weather>>::provide(rain);
}
