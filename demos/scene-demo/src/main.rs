//! # 示例场景
//!
//! 演示注册服务、唤醒场景组件、通过全局访问点自注入以及三阶段生命周期。

mod scene;

use anyhow::Context;
use clap::Parser;
use di_abstractions::{ComponentRegistry, ObjectInjector};
use di_composition::{ComponentInjector, InjectedBehaviour, SceneBootstrapper, SceneSettings};
use di_impl::GlobalInjector;
use scene::{AudioService, GameClock, Player, Scoreboard, Speaker};
use std::path::PathBuf;
use tracing::info;

/// 命令行参数
#[derive(Parser, Debug)]
#[command(name = "scene-demo")]
#[command(about = "Seed DI 示例场景")]
struct Args {
    /// 配置文件路径
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// 日志级别，覆盖配置文件
    #[arg(long)]
    log_level: Option<String>,

    /// 以紧凑 JSON 输出启动报告
    #[arg(long)]
    compact: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut settings =
        SceneSettings::load(args.config.as_deref()).context("加载场景配置失败")?;
    if let Some(level) = args.log_level {
        settings.logging.level = level;
    }

    let mut bootstrapper = SceneBootstrapper::new(settings).context("创建场景启动器失败")?;
    bootstrapper.init_logging()?;
    info!("启动示例场景");

    let container = bootstrapper.container();
    container.register::<GameClock>()?;
    container.bind::<dyn AudioService, Speaker>()?;

    bootstrapper.add_injector(
        ComponentInjector::new()
            .with_component(Player::new("Hero"))
            .with_component(Player::new("Sidekick")),
    );

    let scoreboard = Scoreboard::new();
    let injector: &dyn ObjectInjector = if bootstrapper.settings().scene.install_global {
        &GlobalInjector
    } else {
        bootstrapper.container().as_ref()
    };
    Scoreboard::awake(&scoreboard, injector).context("计分板注入失败")?;

    let audio = bootstrapper.container().get::<dyn AudioService>()?;
    let report = bootstrapper.start().context("场景启动失败")?;

    info!("已播放音效: {:?}", audio.played());
    let output = if args.compact {
        serde_json::to_string(&report)?
    } else {
        serde_json::to_string_pretty(&report)?
    };
    println!("{output}");
    Ok(())
}
