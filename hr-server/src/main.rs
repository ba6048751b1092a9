use anyhow::Context;
use hr_server::{Config, Server, ServerState, setup_environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. 设置环境 (dotenv, 日志)
    setup_environment()?;

    tracing::info!("HR server starting...");

    // 2. 加载配置
    let config = Config::from_env().context("Failed to load configuration")?;

    // 3. 初始化服务器状态 (种子数据)
    let state = ServerState::initialize(&config).context("Failed to initialize state")?;

    // 4. 启动 HTTP 服务器
    let server = Server::with_state(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
