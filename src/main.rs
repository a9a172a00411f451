use clap::Parser;
use face_fusion::{cli, client, config, error, photo};
use face_fusion_common::share::download_file_name;
use face_fusion_common::{build_tiles, thumbnail_chain, FusionWorkflow, ThumbnailSource};
use cli::{Cli, Commands};
use client::FusionClient;
use config::Config;
use error::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Templates => {
            let client = FusionClient::new(config.app_config(cli.server.as_deref())?, cli.verbose)?;
            println!("🎭 face-fusion - 模板列表\n");

            let templates = client.templates().await?;
            for tile in build_tiles(&templates, client.config()) {
                println!("[{}] {}", tile.template_id, tile.name);
                if !tile.description.is_empty() {
                    println!("    {}", tile.description);
                }
                println!("    页面: {}", tile.href);
            }
            println!("\n✔ 共 {} 个模板", templates.len());
        }

        Commands::Template { id } => {
            let client = FusionClient::new(config.app_config(cli.server.as_deref())?, cli.verbose)?;
            let template = client.template(&id).await?;

            println!("[{}] {}", template.id, template.name);
            println!("  说明: {}", template.description);
            println!("  缩略图:");
            for source in thumbnail_chain(&template, client.config()) {
                match source {
                    ThumbnailSource::Local(url) => println!("    本地: {}", url),
                    ThumbnailSource::Remote(url) => println!("    远程: {}", url),
                    ThumbnailSource::Placeholder { label, name } => println!("    占位: {} {}", label, name),
                }
            }
        }

        Commands::Fuse { photo, template, output } => {
            let client = FusionClient::new(config.app_config(cli.server.as_deref())?, cli.verbose)?;
            println!("🎨 face-fusion - 人脸融合\n");

            let mut workflow = FusionWorkflow::new(template, client.config().max_upload_bytes);

            // 1. 校验照片
            println!("[1/3] 检查照片...");
            workflow.select_photo(photo::load_photo(&photo)?)?;
            println!("✔ {}\n", photo.display());

            // 2. 上传 + 融合
            let spinner = spinner("[2/3] 上传照片...");
            let (ticket, selected) = workflow.begin_generate()?;
            let uploaded = client.upload(selected).await;
            let request = workflow.complete_upload(ticket, uploaded.map_err(into_common))?;

            spinner.set_message("[2/3] 生成融合照片...");
            let fused = client.fuse(&request).await;
            workflow.complete_fusion(ticket, fused.map_err(into_common))?;
            spinner.finish_with_message("✔ 融合完成\n");

            // 3. 下载结果
            println!("[3/3] 保存结果...");
            let target = workflow
                .save_target()
                .map(String::from)
                .ok_or(face_fusion_common::Error::NoPhoto)?;
            let bytes = client.download(&target).await?;

            let output = output.unwrap_or_else(|| default_output(&client.config().download_prefix));
            std::fs::write(&output, bytes)?;
            println!("✔ 已保存: {}", output.display());
            if let Some(link) = workflow.share_link() {
                println!("🔗 分享链接: {}", link);
            }

            println!("\n✅ 完成");
        }

        Commands::Config { set_server, show } => {
            let mut config = config;

            if let Some(server) = set_server {
                config.set_server(server)?;
                println!("✔ 已保存服务地址");
            }

            if show {
                println!("设置:");
                println!("  配置文件: {}", Config::config_path()?.display());
                println!("  服务地址: {}", config.resolve_server(cli.server.as_deref()));
                println!(
                    "  超时: {}",
                    config
                        .timeout_seconds
                        .map(|s| format!("{}秒", s))
                        .unwrap_or_else(|| "不限".to_string())
                );
            }
        }
    }

    Ok(())
}

fn spinner(message: &'static str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner
}

fn default_output(prefix: &str) -> PathBuf {
    let millis = chrono::Utc::now().timestamp_millis().max(0) as u64;
    PathBuf::from(download_file_name(prefix, millis))
}

/// 流程状态机只认公共错误类型
fn into_common(error: error::FaceFusionError) -> face_fusion_common::Error {
    match error {
        error::FaceFusionError::Fusion(e) => e,
        other => face_fusion_common::Error::Network(other.to_string()),
    }
}
