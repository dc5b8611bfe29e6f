use anyhow::Result;
use quiz_deck::{logger, App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置，命令行第一个参数可指定单个文件
    let config = Config::from_env().with_input_file(std::env::args().nth(1));

    // 初始化日志
    logger::init(config.verbose_logging);

    // 初始化并运行应用
    let stats = App::initialize(config)?.run().await?;

    if stats.total > 0 && stats.exported == 0 {
        anyhow::bail!("未在任何文档中发现有效的试题内容，请检查格式");
    }

    Ok(())
}
