//! 组卷参数收集 - 业务能力层
//!
//! 依次询问：题目总数、三档难度百分比、科目，并做基本校验

use std::io::{BufRead, Write};

use crate::error::{AppResult, InputError};
use crate::models::distribution::{DistributionSpec, PaperRequest};

/// 从终端（或任意输入流）收集一次组卷请求
pub fn collect_paper_request<R, W>(input: &mut R, output: &mut W) -> AppResult<PaperRequest>
where
    R: BufRead,
    W: Write,
{
    let total = ask_integer(input, output, "请输入要生成的题目总数: ", "题目总数")?;
    if total <= 0 {
        return Err(InputError::NonPositiveTotal { value: total }.into());
    }

    let easy = ask_percentage(input, output, "Easy")?;
    let medium = ask_percentage(input, output, "Medium")?;
    let hard = ask_percentage(input, output, "Hard")?;

    let distribution = DistributionSpec::from_percentages(easy, medium, hard);
    let sum = distribution.total_percentage();
    if sum != 100 {
        return Err(InputError::PercentageSumMismatch { total: sum }.into());
    }

    let subject = ask_line(
        input,
        output,
        "请输入科目（例如 Math、English、Physics）: ",
        "科目",
    )?;
    if subject.is_empty() {
        return Err(InputError::EmptySubject.into());
    }

    Ok(PaperRequest {
        total_questions: total as usize,
        distribution,
        subject,
    })
}

fn ask_percentage<R: BufRead, W: Write>(input: &mut R, output: &mut W, tier: &str) -> AppResult<i32> {
    let prompt = format!("请输入 {} 题目的百分比: ", tier);
    let field = format!("{} 百分比", tier);
    let value = ask_line(input, output, &prompt, &field)?;
    let parsed = value.parse::<i32>().map_err(|_| InputError::NotANumber {
        field,
        value: value.clone(),
    })?;
    Ok(parsed)
}

fn ask_integer<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    field: &str,
) -> AppResult<i64> {
    let value = ask_line(input, output, prompt, field)?;
    let parsed = value.parse::<i64>().map_err(|_| InputError::NotANumber {
        field: field.to_string(),
        value: value.clone(),
    })?;
    Ok(parsed)
}

fn ask_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    field: &str,
) -> AppResult<String> {
    write!(output, "{}", prompt).map_err(InputError::Io)?;
    output.flush().map_err(InputError::Io)?;

    let mut line = String::new();
    if input.read_line(&mut line).map_err(InputError::Io)? == 0 {
        return Err(InputError::UnexpectedEof {
            field: field.to_string(),
        }
        .into());
    }
    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::models::question::Tier;
    use std::io::Cursor;

    fn collect(script: &str) -> AppResult<PaperRequest> {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        collect_paper_request(&mut input, &mut output)
    }

    #[test]
    fn test_collects_full_request() {
        let request = collect("10\n20\n50\n30\nMath\n").unwrap();

        assert_eq!(request.total_questions, 10);
        assert_eq!(request.subject, "Math");
        let shares: Vec<(Tier, i32)> = request
            .distribution
            .shares()
            .iter()
            .map(|s| (s.tier, s.percentage))
            .collect();
        assert_eq!(
            shares,
            vec![(Tier::Easy, 20), (Tier::Medium, 50), (Tier::Hard, 30)]
        );
    }

    #[test]
    fn test_prompts_are_written() {
        let mut input = Cursor::new(b"5\n100\n0\n0\nPhysics\n".to_vec());
        let mut output = Vec::new();
        collect_paper_request(&mut input, &mut output).unwrap();

        let shown = String::from_utf8(output).unwrap();
        assert!(shown.contains("题目总数"));
        assert!(shown.contains("Hard"));
        assert!(shown.contains("科目"));
    }

    #[test]
    fn test_rejects_bad_percentages() {
        let err = collect("10\n20\n50\n20\nMath\n").unwrap_err();
        assert!(matches!(
            err,
            AppError::Input(InputError::PercentageSumMismatch { total: 90 })
        ));

        let err = collect("10\ntwenty\n").unwrap_err();
        assert!(matches!(err, AppError::Input(InputError::NotANumber { .. })));
    }

    #[test]
    fn test_rejects_non_positive_total_and_empty_subject() {
        let err = collect("0\n").unwrap_err();
        assert!(matches!(
            err,
            AppError::Input(InputError::NonPositiveTotal { value: 0 })
        ));

        let err = collect("10\n20\n50\n30\n   \n").unwrap_err();
        assert!(matches!(err, AppError::Input(InputError::EmptySubject)));
    }

    /// 总是写失败的终端
    struct BrokenTerminal;

    impl Write for BrokenTerminal {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_terminal_failure_is_input_io_error() {
        let mut input = Cursor::new(b"10\n".to_vec());
        let err = collect_paper_request(&mut input, &mut BrokenTerminal).unwrap_err();
        assert!(matches!(err, AppError::Input(InputError::Io(_))));
    }

    #[test]
    fn test_eof_is_reported() {
        let err = collect("10\n20\n").unwrap_err();
        assert!(matches!(
            err,
            AppError::Input(InputError::UnexpectedEof { .. })
        ));
    }
}
