use std::io::{self, Write};

use crate::app::AppError;
use crate::catalog;
use crate::config::Config;
use crate::conversion;
use crate::i18n::{keys, Translator};
use crate::quantity::Category;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Convert,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_CONVERT));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Convert),
            "2" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 단위 변환 메뉴를 처리한다. 물리량과 단위는 카탈로그 목록에서 번호로 고른다.
pub fn handle_conversion(cfg: &Config, tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::CONVERT_HEADING));
    for (i, category) in Category::ALL.iter().enumerate() {
        println!("{:2}) {}", i + 1, category.label());
    }
    let category = loop {
        let sel = read_line(tr.t(keys::CONVERT_PROMPT_CATEGORY))?;
        if let Ok(n) = sel.trim().parse::<usize>() {
            if (1..=Category::ALL.len()).contains(&n) {
                break Category::ALL[n - 1];
            }
        }
        println!("{}", tr.t(keys::CONVERT_UNSUPPORTED));
    };

    let value = read_f64(tr, tr.t(keys::CONVERT_PROMPT_VALUE))?;

    let units = catalog::units_for(category);
    for (i, symbol) in units.iter().enumerate() {
        println!("{:2}) {symbol}", i + 1);
    }
    let from_unit = pick_unit(tr, &units, tr.t(keys::CONVERT_PROMPT_FROM_UNIT))?;
    let to_unit = pick_unit(tr, &units, tr.t(keys::CONVERT_PROMPT_TO_UNIT))?;

    // 선택지가 카탈로그에서 나오므로 여기서의 변환 실패는 프로그래밍 오류다.
    let result = conversion::convert(category, value, from_unit, to_unit)?;
    println!(
        "{} {result:.prec$} {to_unit}",
        tr.t(keys::CONVERT_RESULT),
        prec = cfg.decimals as usize
    );
    Ok(())
}

/// 설정 메뉴를 처리한다. 변경 즉시 config.toml에 저장한다.
pub fn handle_settings(cfg: &mut Config, tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{} {}", tr.t(keys::SETTINGS_CURRENT_LANGUAGE), cfg.language);
    println!("{} {}", tr.t(keys::SETTINGS_CURRENT_DECIMALS), cfg.decimals);
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    match sel.trim() {
        "" => return Ok(()),
        "1" => {
            let lang = read_line(tr.t(keys::SETTINGS_PROMPT_LANGUAGE))?;
            let lang = lang.trim();
            if lang.is_empty() {
                println!("{}", tr.t(keys::SETTINGS_INVALID));
                return Ok(());
            }
            cfg.language = lang.to_string();
        }
        "2" => {
            let input = read_line(tr.t(keys::SETTINGS_PROMPT_DECIMALS))?;
            match input.trim().parse::<u8>() {
                Ok(n) if n <= 12 => cfg.decimals = n,
                _ => {
                    println!("{}", tr.t(keys::SETTINGS_INVALID));
                    return Ok(());
                }
            }
        }
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            return Ok(());
        }
    }
    cfg.save()?;
    println!("{}", tr.t(keys::SETTINGS_SAVED));
    Ok(())
}

fn pick_unit<'a>(
    tr: &Translator,
    units: &[&'a str],
    prompt: &str,
) -> Result<&'a str, AppError> {
    loop {
        let sel = read_line(prompt)?;
        if let Ok(n) = sel.trim().parse::<usize>() {
            if (1..=units.len()).contains(&n) {
                return Ok(units[n - 1]);
            }
        }
        println!("{}", tr.t(keys::CONVERT_UNSUPPORTED));
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => return Ok(v),
            _ => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}
