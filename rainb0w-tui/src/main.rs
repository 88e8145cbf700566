//! Rainb0w Dashboard
//!
//! ## 架构
//!
//! 菜单引擎采用 Elm Architecture (TEA) 模式：
//! - **Model**: 菜单状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 设备适配器 (`backend/`)
//!
//! 屏幕之间的流转由 rainb0w-core 的 `Dashboard` 负责，本 crate 只提供
//! `Console` 实现与各 trait 的真实适配器。
//!
//!
//! main.rs
//!
//! fn `main()` {
//!
//!     LocalConfigService::load()  // 解析路径设置
//!     init_logging()              // 日志写入 <log_dir>/dashboard.log
//!     build_context()             // 组装适配器
//!     Dashboard::run()            // 运行状态机
//!
//! }
//!
//! 退出码（由上层管理进程读取）：
//!     0     正常退出 / 卸载 / 更新
//!     1     操作员选择 "Apply Changes"，需要重启服务
//!     2     出错
//!     130   操作员中断

mod app;
mod backend;
mod console;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::process::ExitCode;

use anyhow::{Context, Result};
use rainb0w_core::{CoreError, Dashboard, ExitStatus};

use backend::{build_context, LocalConfigService};
use console::TuiConsole;
use util::init_logging;

const EXIT_FAILURE: u8 = 2;
const EXIT_INTERRUPTED: u8 = 130;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match run().await {
        Ok(status) => ExitCode::from(status.code()),
        Err(e) => match e.downcast_ref::<CoreError>() {
            Some(CoreError::Interrupted) => {
                eprintln!("Interrupted!");
                ExitCode::from(EXIT_INTERRUPTED)
            }
            _ => {
                eprintln!("Error: {e:#}");
                ExitCode::from(EXIT_FAILURE)
            }
        },
    }
}

async fn run() -> Result<ExitStatus> {
    // 1. 设置与日志
    let settings = LocalConfigService::from_env()?.load()?;
    let _guard = init_logging(&settings.log_dir)?;
    tracing::info!("Starting Rainb0w dashboard (home: {})", settings.home_dir.display());

    // 2. 适配器与终端
    let ctx = build_context(&settings);
    let mut console = TuiConsole::new()?;

    // 3. 运行状态机
    let result = Dashboard::new(ctx, &mut console).run().await;

    match result {
        Ok(status) => Ok(status),
        Err(e) => {
            if e.is_expected() {
                tracing::warn!("Dashboard stopped: {e}");
            } else {
                tracing::error!("Dashboard failed: {e}");
            }
            Err(e).context("Dashboard session ended")
        }
    }
}
