//! 生命周期阶段运行器抽象接口

use di_common::LifecyclePhase;

/// 生命周期阶段运行器 trait
///
/// 阶段不会因注册或注入自动触发，调用方需要在一个会话的所有注入完成后
/// 依次调用。运行器本身不阻止重复调用，调用方负责保证每个阶段只运行一次。
pub trait LifecyclePhaseRunner: Send + Sync {
    /// 运行预初始化阶段，返回调用的成员数量
    fn run_pre_init(&self) -> usize;

    /// 运行初始化阶段，返回调用的成员数量
    fn run_init(&self) -> usize;

    /// 运行后初始化阶段，返回调用的成员数量
    fn run_post_init(&self) -> usize;

    /// 运行指定阶段
    fn run_phase(&self, phase: LifecyclePhase) -> usize {
        match phase {
            LifecyclePhase::PreInitialize => self.run_pre_init(),
            LifecyclePhase::Initialize => self.run_init(),
            LifecyclePhase::PostInitialize => self.run_post_init(),
        }
    }

    /// 按固定顺序运行全部阶段
    fn run_all_phases(&self) -> usize {
        LifecyclePhase::ALL
            .into_iter()
            .map(|phase| self.run_phase(phase))
            .sum()
    }

    /// 指定阶段当前的成员数量
    fn bucket_len(&self, phase: LifecyclePhase) -> usize;
}
