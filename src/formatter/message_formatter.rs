use crate::color::{Color, TargetKind};
use crate::level::LogLevel;
use crate::logger::LoggerConfig;
use chrono::{DateTime, SecondsFormat, Utc};

/// 单次写入使用的各段装饰，组装完即丢弃
///
/// 终端目标下是 ANSI 转义序列，样式标记目标下是 CSS 样式参数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedPieces {
    pub timestamp: String,
    pub level: String,
    pub category: String,
    pub text: String,
}

impl FormattedPieces {
    /// 不带任何装饰
    fn plain() -> Self {
        Self {
            timestamp: String::new(),
            level: String::new(),
            category: String::new(),
            text: ": ".to_string(),
        }
    }

    /// 样式标记目标使用的 `%c` 占位符
    fn markers(config: &LoggerConfig) -> Self {
        Self {
            timestamp: marker(config.show_timestamp),
            level: marker(config.show_level),
            category: "%c".to_string(),
            text: ": %c".to_string(),
        }
    }
}

fn marker(shown: bool) -> String {
    if shown { "%c".to_string() } else { String::new() }
}

/// 格式化结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedMessage {
    /// 控制台输出的文本（可能带装饰）
    pub display_text: String,
    /// 不带装饰的文本，写入文件
    pub raw_text: String,
    /// 与 `display_text` 中 `%c` 一一对应的样式参数，终端目标下为空
    pub styles: Vec<String>,
}

/// 消息格式化器
///
/// 目标类型在构造时确定，之后不再检测
#[derive(Debug, Clone, Copy)]
pub struct MessageFormatter {
    target: TargetKind,
}

impl MessageFormatter {
    pub fn new(target: TargetKind) -> Self {
        Self { target }
    }

    pub fn target(&self) -> TargetKind {
        self.target
    }

    /// 生成展示文本和原始文本
    pub fn format(
        &self,
        category: &str,
        level: LogLevel,
        message: &str,
        config: &LoggerConfig,
        now: DateTime<Utc>,
    ) -> FormattedMessage {
        let timestamp = now.to_rfc3339_opts(SecondsFormat::Millis, true);
        let raw_text = compose(
            &FormattedPieces::plain(),
            config,
            &timestamp,
            level,
            category,
            message,
        );

        if !config.use_colors {
            return FormattedMessage {
                display_text: raw_text.clone(),
                raw_text,
                styles: Vec::new(),
            };
        }

        let pieces = self.pieces(level, config);
        match self.target {
            TargetKind::Terminal => FormattedMessage {
                display_text: compose(&pieces, config, &timestamp, level, category, message),
                raw_text,
                styles: Vec::new(),
            },
            TargetKind::DisplayMarkup => {
                let mut styles = Vec::with_capacity(4);
                if config.show_timestamp {
                    styles.push(pieces.timestamp);
                }
                if config.show_level {
                    styles.push(pieces.level);
                }
                styles.push(pieces.category);
                styles.push(pieces.text);

                FormattedMessage {
                    display_text: compose(
                        &FormattedPieces::markers(config),
                        config,
                        &timestamp,
                        level,
                        category,
                        message,
                    ),
                    raw_text,
                    styles,
                }
            }
        }
    }

    /// 计算每一段的装饰
    pub fn pieces(&self, level: LogLevel, config: &LoggerConfig) -> FormattedPieces {
        let mut pieces = FormattedPieces::plain();
        if !config.use_colors {
            return pieces;
        }

        let grey = Color::Grey.resolve(self.target);
        let level_color = Color::for_level(level).resolve(self.target);
        let category_color = config.color.resolve(self.target);

        match self.target {
            TargetKind::Terminal => {
                if config.show_timestamp {
                    pieces.timestamp = format!("\x1b[3{}m", grey);
                }
                if config.show_level {
                    pieces.level = format!("\x1b[3{};22m", level_color);
                }
                pieces.category = format!("\x1b[3{};1m", category_color);
                pieces.text = "\x1b[0m: ".to_string();
            }
            TargetKind::DisplayMarkup => {
                if config.show_timestamp {
                    pieces.timestamp = format!("color:{}", grey);
                }
                if config.show_level {
                    pieces.level = format!("color:{}", level_color);
                }
                pieces.category = format!("color:{}; font-weight: bold", category_color);
                // 消息段恢复默认样式
                pieces.text = String::new();
            }
        }
        pieces
    }
}

fn compose(
    pieces: &FormattedPieces,
    config: &LoggerConfig,
    timestamp: &str,
    level: LogLevel,
    category: &str,
    message: &str,
) -> String {
    let mut result = String::with_capacity(48 + category.len() + message.len());

    result.push_str(&pieces.timestamp);
    if config.show_timestamp {
        result.push_str(timestamp);
        result.push(' ');
    }

    if config.show_level {
        result.push_str(&pieces.level);
        result.push('[');
        result.push_str(level.as_str());
        result.push(']');
        // INFO/WARN 比 DEBUG/ERROR 短一个字符，补齐
        if matches!(level, LogLevel::Info | LogLevel::Warn) {
            result.push(' ');
        }
        result.push(' ');
    }

    result.push_str(&pieces.category);
    result.push_str(category);
    result.push_str(&pieces.text);
    result.push_str(message);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 9, 8, 5, 7).unwrap() + chrono::Duration::milliseconds(42)
    }

    fn config(use_colors: bool, show_timestamp: bool, show_level: bool) -> LoggerConfig {
        LoggerConfig {
            use_colors,
            show_timestamp,
            show_level,
            ..Default::default()
        }
    }

    #[test]
    fn test_raw_text_full() {
        let formatter = MessageFormatter::new(TargetKind::Terminal);
        let formatted = formatter.format(
            "daemon",
            LogLevel::Info,
            "started",
            &config(true, true, true),
            fixed_now(),
        );

        assert_eq!(
            formatted.raw_text,
            "2024-03-09T08:05:07.042Z [INFO]  daemon: started"
        );
    }

    #[test]
    fn test_level_padding() {
        let formatter = MessageFormatter::new(TargetKind::Terminal);
        let cfg = config(false, false, true);
        let line = |level| formatter.format("c", level, "m", &cfg, fixed_now()).raw_text;

        assert_eq!(line(LogLevel::Debug), "[DEBUG] c: m");
        assert_eq!(line(LogLevel::Info), "[INFO]  c: m");
        assert_eq!(line(LogLevel::Warn), "[WARN]  c: m");
        assert_eq!(line(LogLevel::Error), "[ERROR] c: m");
    }

    #[test]
    fn test_no_colors_display_equals_raw() {
        let formatter = MessageFormatter::new(TargetKind::Terminal);
        for (ts, lv) in [(true, true), (true, false), (false, true), (false, false)] {
            let formatted = formatter.format(
                "utils",
                LogLevel::Warn,
                "careful",
                &config(false, ts, lv),
                fixed_now(),
            );
            assert_eq!(formatted.display_text, formatted.raw_text);
            assert!(formatted.styles.is_empty());
        }
    }

    #[test]
    fn test_terminal_display_text() {
        let formatter = MessageFormatter::new(TargetKind::Terminal);
        let cfg = LoggerConfig {
            color: Color::Magenta,
            ..Default::default()
        };
        let formatted = formatter.format("logger3", LogLevel::Error, "bad", &cfg, fixed_now());

        assert_eq!(
            formatted.display_text,
            "\x1b[37m2024-03-09T08:05:07.042Z \x1b[31;22m[ERROR] \x1b[35;1mlogger3\x1b[0m: bad"
        );
        assert_eq!(formatted.raw_text, "2024-03-09T08:05:07.042Z [ERROR] logger3: bad");
    }

    #[test]
    fn test_terminal_category_only() {
        let formatter = MessageFormatter::new(TargetKind::Terminal);
        let formatted = formatter.format(
            "red",
            LogLevel::Debug,
            "Red log message",
            &LoggerConfig {
                color: Color::Red,
                ..config(true, false, false)
            },
            fixed_now(),
        );

        assert_eq!(formatted.display_text, "\x1b[31;1mred\x1b[0m: Red log message");
    }

    #[test]
    fn test_markup_display_text_and_styles() {
        let formatter = MessageFormatter::new(TargetKind::DisplayMarkup);
        let cfg = LoggerConfig {
            color: Color::Blue,
            target: TargetKind::DisplayMarkup,
            ..Default::default()
        };
        let formatted = formatter.format("ui", LogLevel::Debug, "click", &cfg, fixed_now());

        assert_eq!(
            formatted.display_text,
            "%c2024-03-09T08:05:07.042Z %c[DEBUG] %cui: %cclick"
        );
        assert_eq!(
            formatted.styles,
            vec![
                "color:DimGrey".to_string(),
                "color:SkyBlue".to_string(),
                "color:RoyalBlue; font-weight: bold".to_string(),
                String::new(),
            ]
        );
    }

    #[test]
    fn test_markup_styles_follow_shown_segments() {
        let formatter = MessageFormatter::new(TargetKind::DisplayMarkup);
        let formatted = formatter.format(
            "ui",
            LogLevel::Warn,
            "slow",
            &config(true, false, true),
            fixed_now(),
        );

        assert_eq!(formatted.display_text, "%c[WARN]  %cui: %cslow");
        assert_eq!(formatted.styles.len(), 3);
        assert_eq!(formatted.styles[0], "color:Orange");
        assert_eq!(
            formatted.display_text.matches("%c").count(),
            formatted.styles.len()
        );
    }

    #[test]
    fn test_separator_in_category_is_not_escaped() {
        let formatter = MessageFormatter::new(TargetKind::Terminal);
        let formatted = formatter.format(
            "a: b",
            LogLevel::Info,
            "c: d",
            &config(false, false, false),
            fixed_now(),
        );
        assert_eq!(formatted.raw_text, "a: b: c: d");
    }

    #[test]
    fn test_pieces_without_colors() {
        let formatter = MessageFormatter::new(TargetKind::Terminal);
        let pieces = formatter.pieces(LogLevel::Info, &config(false, true, true));
        assert_eq!(pieces, FormattedPieces::plain());
    }
}
