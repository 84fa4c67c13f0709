use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// 代表的な型名のみを1行ずつ出力
    #[default]
    Plain,
    /// 順位・件数・接尾辞・代表名の表
    Table,
    Csv,
    Json,
    Jsonl,
    Yaml,
}
