use clap::{Parser, Subcommand};
use engineering_unit_converter::{app, config, conversion, i18n};

/// 터미널용 단위 변환기.
#[derive(Parser)]
#[command(name = "engineering_unit_converter_cli")]
struct Cli {
    /// UI 언어 (auto/ko/en)
    #[arg(short = 'L', long = "lang", default_value = "auto")]
    lang: String,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// 대화형 메뉴 없이 한 번만 변환하고 종료한다.
    Convert {
        /// 물리량 라벨 (예: "Length", "Mass Flow Rate")
        category: String,
        /// 변환할 값
        value: f64,
        /// 입력 단위 기호 (예: "km")
        from_unit: String,
        /// 변환 단위 기호 (예: "mile")
        to_unit: String,
    },
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
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let tr = i18n::Translator::new_with_pack(&lang, cfg.language_pack_dir.as_deref());

    match cli.command {
        Some(Command::Convert {
            category,
            value,
            from_unit,
            to_unit,
        }) => {
            let category = conversion::parse_category(&category)?;
            let result = conversion::convert(category, value, &from_unit, &to_unit)?;
            println!("{result:.prec$} {to_unit}", prec = cfg.decimals as usize);
            Ok(())
        }
        None => {
            app::run(&mut cfg, &tr)?;
            Ok(())
        }
    }
}
