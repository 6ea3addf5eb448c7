use di_common::{ComponentBase, Inject, Injectable};

#[derive(Default)]
struct Terrain;

#[derive(Injectable)]
struct Tree {
    #[base]
    component: ComponentBase,
    #[inject]
    terrain: Inject<Terrain>,
    height: u32,
}

fn main() {
    let tree = Tree {
        component: ComponentBase::new("Tree"),
        terrain: Inject::new(),
        height: 3,
    };
    assert_eq!(tree.declared_sites().len(), 1);
    assert!(tree.base().is_some());
    assert!(!tree.terrain.is_injected());
    assert_eq!(tree.height, 3);
}
