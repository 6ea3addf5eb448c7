//! 示例场景中的服务与组件

use di_common::{
    ComponentBase, Initializable, Inject, Injectable, OnInjected, PostInitializable,
    PreInitializable,
};
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::info;

/// 音频服务
pub trait AudioService: Send + Sync {
    /// 播放音效
    fn play(&self, clip: &str);

    /// 已播放的音效
    fn played(&self) -> Vec<String>;
}

/// 扬声器，作为 `dyn AudioService` 注册
#[derive(Default, Injectable)]
#[injectable(provides(dyn AudioService))]
pub struct Speaker {
    clips: Mutex<Vec<String>>,
}

impl AudioService for Speaker {
    fn play(&self, clip: &str) {
        info!("播放音效: {}", clip);
        self.clips.lock().push(clip.to_string());
    }

    fn played(&self) -> Vec<String> {
        self.clips.lock().clone()
    }
}

/// 游戏时钟
#[derive(Debug, Default)]
pub struct GameClock {
    ticks: Mutex<u64>,
}

impl GameClock {
    /// 前进一帧
    pub fn tick(&self) -> u64 {
        let mut ticks = self.ticks.lock();
        *ticks += 1;
        *ticks
    }
}

/// 场景中的角色基类层级
#[derive(Injectable)]
pub struct Actor {
    #[base]
    component: ComponentBase,
    #[inject]
    clock: Inject<GameClock>,
}

impl Actor {
    /// 创建角色
    pub fn new(name: &str) -> Self {
        Self {
            component: ComponentBase::new(name),
            clock: Inject::new(),
        }
    }

    /// 角色名称
    pub fn name(&self) -> &str {
        self.component.name()
    }
}

/// 玩家
#[derive(Injectable)]
#[injectable(pre_initialize, initialize, post_initialize, on_injected)]
pub struct Player {
    #[base]
    actor: Actor,
    #[inject]
    audio: Inject<dyn AudioService>,
}

impl Player {
    /// 创建玩家
    pub fn new(name: &str) -> Arc<Self> {
        Arc::new(Self {
            actor: Actor::new(name),
            audio: Inject::new(),
        })
    }
}

impl OnInjected for Player {
    fn on_injected(&self) {
        info!("玩家注入完成: {}", self.actor.name());
    }
}

impl PreInitializable for Player {
    fn pre_initialize(&self) {
        self.audio.get().play("spawn");
    }
}

impl Initializable for Player {
    fn initialize(&self) {
        let tick = self.actor.clock.get().tick();
        info!("玩家初始化: {}，帧: {}", self.actor.name(), tick);
    }
}

impl PostInitializable for Player {
    fn post_initialize(&self) {
        self.audio.get().play("ready");
    }
}

/// 计分板，唤醒时通过全局访问点注入自己
#[derive(Injectable)]
#[injectable(initialize)]
pub struct Scoreboard {
    #[base]
    component: ComponentBase,
    #[inject]
    clock: Inject<GameClock>,
}

impl Scoreboard {
    /// 创建计分板
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            component: ComponentBase::new("Scoreboard"),
            clock: Inject::new(),
        })
    }
}

impl Initializable for Scoreboard {
    fn initialize(&self) {
        info!("{} 初始化，帧: {}", self.component.name(), self.clock.get().tick());
    }
}

impl di_composition::InjectedBehaviour for Scoreboard {
    fn init(&self) {
        info!("{} 已注入", self.component.name());
    }
}
