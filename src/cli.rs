use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "face-fusion")]
#[command(about = "人脸融合命令行客户端", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 输出请求与响应详情
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 服务地址（默认读取 FACE_FUSION_SERVER 或配置文件）
    #[arg(long, global = true)]
    pub server: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 列出所有模板
    Templates,

    /// 查看单个模板及其缩略图回退链
    Template {
        /// 模板 ID
        #[arg(required = true)]
        id: String,
    },

    /// 上传照片并生成融合结果
    Fuse {
        /// 照片路径
        #[arg(required = true)]
        photo: PathBuf,

        /// 模板 ID
        #[arg(short, long, default_value = "1")]
        template: String,

        /// 输出文件（默认: 当前目录/fanyi_fusion_<毫秒>.jpg）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 查看或修改设置
    Config {
        /// 保存服务地址
        #[arg(long)]
        set_server: Option<String>,

        /// 显示当前设置
        #[arg(long)]
        show: bool,
    },
}
