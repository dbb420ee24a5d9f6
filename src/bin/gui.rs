#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use eframe::{egui, App, Frame};
use image::GenericImageView;
use std::{env, fs, path::Path};

use engineering_unit_converter::{
    catalog, config, conversion, i18n, quantity::Category,
};

fn main() -> Result<(), eframe::Error> {
    // CLI 언어 옵션 처리: --lang xx 또는 --lang=xx (xx: auto/en-us/ko-kr/ko)
    let mut cli_lang: Option<String> = None;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if a == "--lang" || a == "-L" {
            if i + 1 < args.len() {
                cli_lang = Some(args[i + 1].clone());
                i += 1;
            }
        }
        i += 1;
    }

    let icon_data = load_app_icon();
    let mut viewport = egui::ViewportBuilder::default().with_inner_size([440.0, 320.0]);
    if let Some(icon) = icon_data.clone() {
        viewport = viewport.with_icon(icon);
    }
    let cfg = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let mut app_cfg = config::load_or_default().unwrap_or_default();
    if let Some(lang_cli) = cli_lang {
        let resolved = i18n::resolve_language(&lang_cli, Some(app_cfg.language.as_str()));
        app_cfg.language = resolved;
    }
    eframe::run_native(
        "Engineering Unit Converter",
        cfg,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                eprintln!("Font error: {e}");
            }
            Box::new(GuiApp::new(app_cfg.clone()))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["unit_converter.png", "icon.png", "assets/icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    let font_name = name.to_string();
    fonts
        .font_data
        .insert(font_name.clone(), egui::FontData::from_owned(bytes));
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .insert(0, font_name.clone());
    fonts
        .families
        .entry(egui::FontFamily::Monospace)
        .or_default()
        .insert(0, font_name);
    ctx.set_fonts(fonts);
}

/// 한글을 표시하기 위해 기본 폰트를 우선 적용한다.
/// 1) assets/fonts/malgun.ttf
/// 2) Windows 시스템 폰트(맑은 고딕/굴림/바탕 등)
/// 3) 모두 실패 시 Err를 반환하고 기본 폰트를 유지한다.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    let asset_path = Path::new("assets/fonts/malgun.ttf");
    if asset_path.exists() {
        let bytes = fs::read(asset_path).map_err(|e| format!("Failed to read font file: {e}"))?;
        apply_font_bytes(ctx, bytes, "korean_font");
        return Ok(());
    }

    if let Some(windir) = std::env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        let candidates = [
            "malgun.ttf",
            "malgunsl.ttf",
            "malgunbd.ttf",
            "gulim.ttc",
            "batang.ttc",
        ];
        for cand in candidates {
            let p = fonts.join(cand);
            if p.exists() {
                let bytes = fs::read(&p)
                    .map_err(|e| format!("Failed to read system font ({}): {e}", p.display()))?;
                apply_font_bytes(ctx, bytes, "korean_font");
                return Ok(());
            }
        }
    }

    Err("Korean-capable font not found; falling back to default fonts.".into())
}

fn label_with_tip(ui: &mut egui::Ui, text: &str, tip: &str) -> egui::Response {
    ui.label(text).on_hover_text(tip)
}

fn heading_with_tip(ui: &mut egui::Ui, text: &str, tip: &str) -> egui::Response {
    ui.heading(text).on_hover_text(tip)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Converter,
    Settings,
}

struct GuiApp {
    config: config::Config,
    tr: i18n::Translator,
    tab: Tab,
    category: Category,
    value_input: String,
    from_unit: String,
    to_unit: String,
    result: Option<String>,
    lang_input: String,
    settings_status: Option<String>,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        let lang_code = i18n::resolve_language("auto", Some(config.language.as_str()));
        let tr = i18n::Translator::new_with_pack(&lang_code, config.language_pack_dir.as_deref());
        let category = config.default_category;
        let (from_unit, to_unit) = default_units_for(category);
        let lang_input = config.language.clone();
        Self {
            config,
            tr,
            tab: Tab::Converter,
            category,
            value_input: String::new(),
            from_unit: from_unit.to_string(),
            to_unit: to_unit.to_string(),
            result: None,
            lang_input,
            settings_status: None,
        }
    }

    fn ui_converter(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        heading_with_tip(
            ui,
            &txt("gui.unit.heading", "Engineering Unit Converter"),
            &txt(
                "gui.unit.tip",
                "Convert a value between units of the same physical quantity.",
            ),
        );
        ui.add_space(8.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.vertical(|ui| {
                egui::Grid::new("conv_grid")
                    .num_columns(2)
                    .spacing([12.0, 8.0])
                    .show(ui, |ui| {
                        label_with_tip(
                            ui,
                            &txt("gui.unit.category_label", "Category"),
                            &txt("gui.unit.category_tip", "Select the physical quantity"),
                        );
                        let before = self.category;
                        egui::ComboBox::from_id_source("conv_category")
                            .selected_text(self.category.label())
                            .show_ui(ui, |ui| {
                                for c in Category::ALL {
                                    ui.selectable_value(&mut self.category, c, c.label());
                                }
                            });
                        if before != self.category {
                            let (f, t) = default_units_for(self.category);
                            self.from_unit = f.to_string();
                            self.to_unit = t.to_string();
                            self.result = None;
                        }
                        ui.end_row();

                        label_with_tip(
                            ui,
                            &txt("gui.unit.value_label", "Value"),
                            &txt("gui.unit.value_tip", "Enter the value to convert"),
                        );
                        ui.add(
                            egui::TextEdit::singleline(&mut self.value_input)
                                .hint_text(txt("gui.unit.value_hint", "Enter value")),
                        );
                        ui.end_row();

                        label_with_tip(
                            ui,
                            &txt("gui.unit.from_label", "From"),
                            &txt("gui.unit.from_tip", "Current unit of the value"),
                        );
                        ui.horizontal(|ui| {
                            unit_combo(ui, "conv_from", &mut self.from_unit, self.category);
                            if ui
                                .button("⇄")
                                .on_hover_text(txt("gui.unit.swap_tip", "Swap the selected units"))
                                .clicked()
                            {
                                let (f, t) =
                                    conversion::swap_units(&self.from_unit, &self.to_unit);
                                let (f, t) = (f.to_string(), t.to_string());
                                self.from_unit = f;
                                self.to_unit = t;
                            }
                            unit_combo(ui, "conv_to", &mut self.to_unit, self.category);
                        });
                        ui.end_row();
                    });
                ui.add_space(8.0);
                if ui.button(txt("gui.unit.run", "Convert")).clicked() {
                    self.result = Some(self.run_conversion(&txt));
                }
                match &self.result {
                    Some(res) => ui.label(res),
                    None => ui.label(txt("gui.unit.result_idle", "Result: -")),
                };
            });
        });
    }

    /// 입력 문자열을 파싱해 변환을 수행하고 표시용 문자열을 만든다.
    /// 숫자가 아니거나 유한하지 않으면 엔진을 호출하지 않는다.
    fn run_conversion<F>(&self, txt: &F) -> String
    where
        F: Fn(&str, &str) -> String,
    {
        let value = match self.value_input.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => v,
            _ => return txt("gui.unit.invalid_number", "Invalid number"),
        };
        match conversion::convert(self.category, value, &self.from_unit, &self.to_unit) {
            Ok(v) => format!(
                "{v:.prec$} {}",
                self.to_unit,
                prec = self.config.decimals as usize
            ),
            Err(e) => format!("{}: {e}", txt("gui.unit.error_prefix", "Error")),
        }
    }

    fn ui_settings(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        ui.heading(txt("gui.settings.heading", "Settings"));
        ui.add_space(8.0);
        egui::Grid::new("settings_grid")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.label(txt("gui.settings.language_label", "Language"));
                egui::ComboBox::from_id_source("settings_lang")
                    .selected_text(self.lang_input.clone())
                    .show_ui(ui, |ui| {
                        for code in ["auto", "ko", "en"] {
                            ui.selectable_value(&mut self.lang_input, code.to_string(), code);
                        }
                    });
                ui.end_row();

                ui.label(txt("gui.settings.decimals_label", "Decimal places"));
                ui.add(egui::DragValue::new(&mut self.config.decimals).clamp_range(0..=12));
                ui.end_row();
            });
        ui.add_space(8.0);
        if ui.button(txt("gui.settings.save", "Save")).clicked() {
            self.config.language = self.lang_input.clone();
            self.config.default_category = self.category;
            self.settings_status = Some(match self.config.save() {
                Ok(()) => {
                    let resolved =
                        i18n::resolve_language("auto", Some(self.config.language.as_str()));
                    self.tr = i18n::Translator::new_with_pack(
                        &resolved,
                        self.config.language_pack_dir.as_deref(),
                    );
                    txt("gui.settings.saved", "Settings saved.")
                }
                Err(e) => format!("{}: {e}", txt("gui.settings.save_error", "Failed to save settings")),
            });
        }
        if let Some(status) = &self.settings_status {
            ui.label(status);
        }
    }

    /// 사이드 메뉴를 제공한다.
    fn ui_nav(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        ui.add_space(8.0);
        for (tab, label) in [
            (Tab::Converter, txt("gui.tab.converter", "Unit Converter")),
            (Tab::Settings, txt("gui.tab.settings", "Settings")),
        ] {
            let selected = self.tab == tab;
            let button = egui::Button::new(label)
                .fill(if selected {
                    ui.visuals().selection.bg_fill
                } else {
                    ui.visuals().extreme_bg_color
                })
                .min_size(egui::vec2(ui.available_width(), 32.0));
            if ui.add(button).clicked() {
                self.tab = tab;
            }
            ui.add_space(4.0);
        }
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        egui::SidePanel::left("nav")
            .resizable(false)
            .default_width(130.0)
            .show(ctx, |ui| {
                self.ui_nav(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| match self.tab {
                    Tab::Converter => self.ui_converter(ui),
                    Tab::Settings => self.ui_settings(ui),
                });
        });
    }
}

/// 물리량 변경 시 기본으로 선택할 (입력, 변환) 단위 쌍. 카탈로그 순서의
/// 첫 항목(기준 단위)과 둘째 항목이다.
fn default_units_for(category: Category) -> (&'static str, &'static str) {
    let units = catalog::units_for(category);
    (units[0], units[1])
}

fn unit_combo(ui: &mut egui::Ui, id: &str, value: &mut String, category: Category) {
    egui::ComboBox::from_id_source(id)
        .selected_text(value.clone())
        .show_ui(ui, |ui| {
            for symbol in catalog::units_for(category) {
                ui.selectable_value(value, symbol.to_string(), symbol);
            }
        });
}
