use clap::Parser;

use physics_engineering_toolbox::{app, config, i18n};

/// 터미널용 물리/공학 계산기.
#[derive(Debug, Parser)]
#[command(name = "physics_engineering_toolbox_cli", version)]
struct Cli {
    /// 언어 코드 (auto/en-us/ko-kr)
    #[arg(long, short = 'L', default_value = "auto")]
    lang: String,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("오류: {err}");
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut cfg = config::load_or_default()?;
    let lang_code = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let tr = i18n::Translator::new_with_pack(&lang_code, cfg.language_pack_dir.as_deref());
    app::run(&mut cfg, &tr)?;
    Ok(())
}
