use clap::Parser;
use discount_engine::cli::{Cli, execute, render_error};
use discount_engine::setup_environment;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 1. 设置环境 (dotenv, 配置, 日志); 日志未就绪前的失败只输出到 stdout
    let outcome = setup_environment().and_then(|config| {
        execute(&cli.command, &config).inspect_err(|err| {
            tracing::error!(
                code = %err.code,
                status = err.http_status().as_u16(),
                "Command failed: {}",
                err.message
            );
        })
    });

    // 2. 输出 ApiResponse (stdout), 失败时非零退出
    match outcome {
        Ok(output) => {
            println!("{output}");
            Ok(())
        }
        Err(err) => {
            println!("{}", render_error(&err));
            Err(anyhow::Error::new(err).context("discount-engine command failed"))
        }
    }
}
