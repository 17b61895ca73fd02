use crate::level::LogLevel;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 输出目标类型，决定颜色和装饰的表示方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetKind {
    /// 终端，使用 ANSI 转义序列
    #[default]
    Terminal,
    /// 支持样式标记的控制台，使用 `%c` 占位符加 CSS 样式参数
    DisplayMarkup,
}

/// 逻辑颜色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    Grey,
    White,
    Default,
}

/// 颜色在具体目标下的表示
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConcreteColor {
    /// ANSI 前景色编号
    Ansi(u8),
    /// CSS 颜色名
    Css(&'static str),
}

impl fmt::Display for ConcreteColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConcreteColor::Ansi(code) => write!(f, "{}", code),
            ConcreteColor::Css(name) => f.write_str(name),
        }
    }
}

// 下标与 LogLevel::rank 对应
const LEVEL_COLORS: [Color; 5] = [
    Color::Cyan,
    Color::Green,
    Color::Yellow,
    Color::Red,
    Color::Default,
];

impl Color {
    pub const ALL: [Color; 10] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::Grey,
        Color::White,
        Color::Default,
    ];

    /// 将逻辑颜色解析为目标环境下的具体颜色
    pub fn resolve(self, target: TargetKind) -> ConcreteColor {
        match target {
            TargetKind::Terminal => ConcreteColor::Ansi(match self {
                Color::Black => 0,
                Color::Red => 1,
                Color::Green => 2,
                Color::Yellow => 3,
                Color::Blue => 4,
                Color::Magenta => 5,
                Color::Cyan => 6,
                Color::Grey => 7,
                Color::White | Color::Default => 9,
            }),
            TargetKind::DisplayMarkup => ConcreteColor::Css(match self {
                Color::Black | Color::Default => "Black",
                Color::Red => "IndianRed",
                Color::Green => "LimeGreen",
                Color::Yellow => "Orange",
                Color::Blue => "RoyalBlue",
                Color::Magenta => "Orchid",
                Color::Cyan => "SkyBlue",
                Color::Grey => "DimGrey",
                Color::White => "White",
            }),
        }
    }

    /// 未显式配置颜色时，级别使用的默认颜色
    pub fn for_level(level: LogLevel) -> Color {
        LEVEL_COLORS[level.rank()]
    }

    /// 完整的颜色表
    pub fn palette(target: TargetKind) -> Vec<(Color, ConcreteColor)> {
        Color::ALL
            .iter()
            .map(|color| (*color, color.resolve(target)))
            .collect()
    }
}
