//! Novelcraft - 小说写作辅助后端
//!
//! - Domain: novel/, character/ (Bounded Contexts)
//! - Application: commands, queries, ports
//! - Infrastructure: http, memory, persistence

use std::sync::Arc;

use novelcraft::config::{load_config, print_config, LogConfig};
use novelcraft::infrastructure::http::{AppState, HttpServer, ServerConfig};
use novelcraft::infrastructure::persistence::{
    init_data_dir, JsonCharacterRepository, JsonNovelRepository,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config.log);

    tracing::info!("Novelcraft - 小说写作辅助后端");
    print_config(&config);

    // 确保数据目录和集合文件存在
    init_data_dir(&config.storage.data_dir).await?;

    // 创建 Repository 适配器
    let novel_repo = Arc::new(JsonNovelRepository::new(&config.storage.data_dir));
    let character_repo = Arc::new(JsonCharacterRepository::new(&config.storage.data_dir));

    // 创建 HTTP 服务器
    let server_config = ServerConfig::new(&config.server.host, config.server.port)
        .with_body_limit(config.server.body_limit_bytes);
    let state = AppState::new(novel_repo, character_repo);

    let server = HttpServer::new(server_config, state);

    // 启动服务器（带优雅关闭）
    server.run_with_shutdown(shutdown_signal()).await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}

fn init_tracing(log: &LogConfig) {
    let log_filter = format!(
        "{},novelcraft={},tower_http=debug",
        log.level, log.level
    );
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_filter));

    if log.json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for ctrl-c: {}", e);
        // 无法监听信号时保持运行，直到进程被外部终止
        std::future::pending::<()>().await;
    }
    tracing::info!("Received shutdown signal");
}
