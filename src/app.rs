use crate::config::Config;
use crate::conversion;
use crate::i18n::{self, keys, Translator};
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(crate::config::ConfigError),
    /// 단위 변환 오류
    Conversion(conversion::ConversionError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Conversion(e) => write!(f, "단위 변환 오류: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<conversion::ConversionError> for AppError {
    fn from(value: conversion::ConversionError) -> Self {
        AppError::Conversion(value)
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run(config: &mut Config, tr: &Translator) -> Result<(), AppError> {
    let mut tr = tr.clone();
    loop {
        match ui_cli::main_menu(&tr)? {
            MenuChoice::Convert => ui_cli::handle_conversion(config, &tr)?,
            MenuChoice::Settings => {
                ui_cli::handle_settings(config, &tr)?;
                // 언어 변경을 바로 반영한다.
                let lang = i18n::resolve_language("auto", Some(config.language.as_str()));
                tr = Translator::new_with_pack(&lang, config.language_pack_dir.as_deref());
            }
            MenuChoice::Exit => {
                println!("{}", tr.t(keys::APP_EXIT));
                return Ok(());
            }
        }
    }
}
