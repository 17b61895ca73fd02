use serde_json::Value;
use std::fmt;

/// printf 风格格式化的参数
#[derive(Debug, Clone, PartialEq)]
pub enum FormatArg {
    String(String),
    I64(i64),
    U64(u64),
    F64(f64),
    Bool(bool),
    /// 任意 JSON 兼容的数据
    Json(Value),
}

impl FormatArg {
    /// `%d` 的数值表示，无法转换时为 `None`
    fn as_number(&self) -> Option<f64> {
        match self {
            FormatArg::String(s) => s.trim().parse::<f64>().ok(),
            FormatArg::I64(n) => Some(*n as f64),
            FormatArg::U64(n) => Some(*n as f64),
            FormatArg::F64(n) => Some(*n),
            FormatArg::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            FormatArg::Json(v) => v.as_f64(),
        }
    }

    fn to_json(&self) -> String {
        match self {
            FormatArg::String(s) => Value::String(s.clone()).to_string(),
            FormatArg::Json(v) => v.to_string(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for FormatArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatArg::String(s) => f.write_str(s),
            FormatArg::I64(n) => write!(f, "{}", n),
            FormatArg::U64(n) => write!(f, "{}", n),
            FormatArg::F64(n) => write!(f, "{}", n),
            FormatArg::Bool(b) => write!(f, "{}", b),
            FormatArg::Json(v) => write!(f, "{}", v),
        }
    }
}

/// 按 printf 风格把参数代入格式串
///
/// 支持 `%s` `%d` `%i` `%f` `%j` `%o` `%O` `%%`；没有剩余参数的占位符原样保留，
/// 多余的参数用空格拼接在末尾。没有参数时格式串原样返回。
pub fn sprintf(fmt: &str, args: &[FormatArg]) -> String {
    if args.is_empty() {
        return fmt.to_string();
    }

    let mut result = String::with_capacity(fmt.len() + args.len() * 8);
    let mut rest = args.iter();
    let mut chars = fmt.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '%' {
            result.push(ch);
            continue;
        }

        let Some(&directive) = chars.peek() else {
            result.push('%');
            break;
        };

        if directive == '%' {
            chars.next();
            result.push('%');
            continue;
        }

        if !matches!(directive, 's' | 'd' | 'i' | 'f' | 'j' | 'o' | 'O') {
            result.push('%');
            continue;
        }

        let Some(arg) = rest.next() else {
            result.push('%');
            continue;
        };
        chars.next();

        match directive {
            's' => result.push_str(&arg.to_string()),
            'd' => push_number(&mut result, arg.as_number()),
            'i' => push_number(&mut result, arg.as_number().map(f64::trunc)),
            'f' => push_number(&mut result, arg.as_number()),
            _ => result.push_str(&arg.to_json()),
        }
    }

    for arg in rest {
        result.push(' ');
        result.push_str(&arg.to_string());
    }

    result
}

fn push_number(buffer: &mut String, value: Option<f64>) {
    use std::fmt::Write;
    match value {
        Some(n) if n.is_finite() => {
            let _ = write!(buffer, "{}", n);
        }
        Some(n) if n.is_infinite() => {
            buffer.push_str(if n > 0.0 { "Infinity" } else { "-Infinity" });
        }
        _ => buffer.push_str("NaN"),
    }
}

impl From<String> for FormatArg {
    fn from(s: String) -> Self {
        FormatArg::String(s)
    }
}

impl From<&String> for FormatArg {
    fn from(s: &String) -> Self {
        FormatArg::String(s.clone())
    }
}

impl From<&str> for FormatArg {
    fn from(s: &str) -> Self {
        FormatArg::String(s.to_string())
    }
}

impl From<i64> for FormatArg {
    fn from(n: i64) -> Self {
        FormatArg::I64(n)
    }
}

impl From<i32> for FormatArg {
    fn from(n: i32) -> Self {
        FormatArg::I64(n as i64)
    }
}

impl From<u64> for FormatArg {
    fn from(n: u64) -> Self {
        FormatArg::U64(n)
    }
}

impl From<u32> for FormatArg {
    fn from(n: u32) -> Self {
        FormatArg::U64(n as u64)
    }
}

impl From<usize> for FormatArg {
    fn from(n: usize) -> Self {
        FormatArg::U64(n as u64)
    }
}

impl From<f64> for FormatArg {
    fn from(n: f64) -> Self {
        FormatArg::F64(n)
    }
}

impl From<f32> for FormatArg {
    fn from(n: f32) -> Self {
        FormatArg::F64(n as f64)
    }
}

impl From<bool> for FormatArg {
    fn from(b: bool) -> Self {
        FormatArg::Bool(b)
    }
}

impl From<Value> for FormatArg {
    fn from(v: Value) -> Self {
        FormatArg::Json(v)
    }
}
