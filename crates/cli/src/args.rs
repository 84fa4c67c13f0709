// crates/cli/src/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Args as ClapArgs, Parser, ValueHint};
use name_census_engine::pattern::ClassPattern;

use crate::options::OutputFormat;
use crate::parsers::{parse_positive_usize, parse_usize_1_to_512};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "name_census",
    version = crate::VERSION,
    about = "クラスパス上の型名から命名規約（接尾辞）を集計し、多い順に代表名を表示します"
)]
pub struct Args {
    /// クラスパスのルート（ディレクトリまたは .class ファイル、既定: .）
    #[arg(value_hint = ValueHint::AnyPath)]
    pub roots: Vec<PathBuf>,

    #[command(flatten)]
    pub scan: ScanArgs,

    #[command(flatten)]
    pub output: OutputArgs,

    #[command(flatten)]
    pub behavior: BehaviorArgs,
}

#[derive(ClapArgs, Debug)]
#[command(next_help_heading = "走査/入力")]
pub struct ScanArgs {
    /// 走査パターン（例: classpath*:org/springframework/**/*.class、カンマ区切り/複数指定可）
    #[arg(
        long,
        short = 'p',
        value_delimiter = ',',
        default_value = name_census_engine::pattern::DEFAULT_PATTERN
    )]
    pub pattern: Vec<ClassPattern>,

    /// 型名の一覧を読み込む（改行区切り、a.b.C または a/b/C.class）
    #[arg(long, value_hint = ValueHint::FilePath, conflicts_with = "roots")]
    pub names_from: Option<PathBuf>,

    /// 隠しファイル/ディレクトリも対象
    #[arg(long)]
    pub hidden: bool,

    /// シンボリックリンクを辿る
    #[arg(long)]
    pub follow: bool,

    /// .gitignore / .ignore を尊重
    #[arg(long)]
    pub git_ignore: bool,

    /// 走査の最大深さ
    #[arg(long, value_parser = parse_positive_usize)]
    pub max_depth: Option<usize>,

    /// 読み込みの並列数（既定: CPU 数）
    #[arg(long, short = 'j', value_parser = parse_usize_1_to_512)]
    pub jobs: Option<usize>,
}

#[derive(ClapArgs, Debug)]
#[command(next_help_heading = "出力")]
pub struct OutputArgs {
    /// 出力フォーマット
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,

    /// 上位N件のみ表示
    #[arg(long, value_parser = parse_positive_usize)]
    pub top: Option<usize>,
}

#[derive(ClapArgs, Debug)]
#[command(next_help_heading = "動作")]
pub struct BehaviorArgs {
    /// 読み込めないクラスがあれば即座に失敗する
    #[arg(long)]
    pub strict: bool,

    /// ログを詳細に（-v: info, -vv: debug）
    #[arg(long, short = 'v', action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// エラー以外のログを抑制
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameterless_invocation_uses_defaults() {
        let args = Args::try_parse_from(["name_census"]).unwrap();
        assert!(args.roots.is_empty());
        assert_eq!(args.scan.pattern, vec![ClassPattern::default()]);
        assert_eq!(args.output.format, OutputFormat::Plain);
        assert!(args.output.top.is_none());
        assert!(!args.behavior.strict);
    }

    #[test]
    fn patterns_split_on_commas() {
        let args = Args::try_parse_from([
            "name_census",
            "--pattern",
            "classpath*:org/**/*.class,com/acme/*.class",
        ])
        .unwrap();
        let globs: Vec<_> = args.scan.pattern.iter().map(ClassPattern::glob).collect();
        assert_eq!(globs, vec!["org/**/*.class", "com/acme/*.class"]);
    }

    #[test]
    fn names_from_conflicts_with_roots() {
        let result = Args::try_parse_from(["name_census", "--names-from", "list.txt", "build"]);
        assert!(result.is_err());
    }

    #[test]
    fn verbosity_counts() {
        let args = Args::try_parse_from(["name_census", "-vv"]).unwrap();
        assert_eq!(args.behavior.verbose, 2);
        assert!(Args::try_parse_from(["name_census", "-v", "-q"]).is_err());
    }

    #[test]
    fn zero_top_is_rejected() {
        assert!(Args::try_parse_from(["name_census", "--top", "0"]).is_err());
    }
}
