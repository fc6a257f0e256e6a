//! Prompt assembly for the generation service.

use herald_core::DrawDataset;

/// Draws included in the grounding block.
pub const CONTEXT_DRAWS: usize = 10;

const PERSONA: &str =
    "당신은 한국 로또 6/45 분석 블로그의 전문 작가입니다. 아래 데이터를 참고하여 블로그 글을 작성해주세요.";

const WRITING_RULES: &str = "작성 규칙:
- 한국어로 작성
- 마크다운 형식 (##, **, -, 등)
- 1500~2500단어
- 데이터에 기반한 사실만 언급
- 마지막에 다음 문구를 포함: \"이 글은 AI 분석 도구의 도움을 받아 작성되었으며, 실제 당첨 데이터를 기반으로 합니다.\"
- \"당첨을 보장하지 않는다\"는 면책 문구 포함";

/// The recent-draws block every prompt is grounded on.
///
/// # Examples
///
/// ```
/// use herald_core::{Draw, DrawDataset};
/// use herald_pipeline::grounding_context;
///
/// let dataset = DrawDataset::new(vec![Draw::new(1, "2002-12-07", [10, 23, 29, 33, 37, 40], 16, 0)]);
/// assert_eq!(
///     grounding_context(&dataset),
///     "최근 10회차 당첨번호:\n1회 (2002-12-07): 10, 23, 29, 33, 37, 40 + 보너스 16 (1등 0명)"
/// );
/// ```
pub fn grounding_context(dataset: &DrawDataset) -> String {
    let lines = dataset
        .recent(CONTEXT_DRAWS)
        .iter()
        .map(|draw| {
            let numbers = draw
                .numbers()
                .iter()
                .map(|n| n.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            format!(
                "{}회 ({}): {} + 보너스 {} (1등 {}명)",
                draw.round(),
                draw.date(),
                numbers,
                draw.bonus(),
                draw.first_prize_winners()
            )
        })
        .collect::<Vec<_>>();
    format!("최근 {}회차 당첨번호:\n{}", CONTEXT_DRAWS, lines.join("\n"))
}

/// Full user prompt: persona, grounding data, topic instructions, writing rules.
pub fn build_prompt(dataset: &DrawDataset, instructions: &str) -> String {
    format!(
        "{}\n\n{}\n\n---\n\n{}\n\n{}",
        PERSONA,
        grounding_context(dataset),
        instructions,
        WRITING_RULES
    )
}
