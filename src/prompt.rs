//! Request Builder
//!
//! Turns the interview metadata collected by the form into the two-message
//! request sent to the chat-completion endpoint. Everything here is pure: the
//! same [`InterviewRequest`] always yields byte-identical messages.

use crate::config::ModelId;
use crate::core_types::messages::ChatMessage;
use crate::error::OutlineResult;
use serde::{Deserialize, Serialize};

/// The six section headers every generated outline must contain, verbatim.
pub const SECTION_HEADERS: [&str; 6] = [
    "## 一、访谈目标（对齐）",
    "## 二、时间分配（总时长 60 分钟可调）",
    "## 三、关键场景深挖",
    "## 四、主持人提示语",
    "## 五、风险与红旗",
    "## 六、缺失证据清单",
];

/// Marker the model must emit instead of skipping a section.
pub const PLACEHOLDER_MARKER: &str = "【待补】";

const INTERVIEW_OUTLINE_PROMPT: &str = r#"你是一名专业的【课程研发编辑】，长期负责将标杆人物的业务经验转化为可复制的课程内容。
你的任务是：根据输入的访谈对象、角色、主题和目标，生成一份完整的访谈提纲。

【硬性要求】
- 必须输出 Markdown 格式
- 必须包含以下 6 个章节（逐字一致）：
  ## 一、访谈目标（对齐）
  ## 二、时间分配（总时长 60 分钟可调）
  ## 三、关键场景深挖
  ## 四、主持人提示语
  ## 五、风险与红旗
  ## 六、缺失证据清单
- 若信息不足，不得跳过章节，用【待补】占位

【写作规则】
1. **访谈目标**  
   - 用简明扼要的条目，对齐研发团队与访谈对象的共识。
   - 输出应包含“目标拆解、预期成果、关键输出物”。

2. **时间分配**  
   - 合理分配 60 分钟的访谈时间到不同环节（导入、场景深挖、方法沉淀、总结）。
   - 输出表格形式，明确每个环节所需时间。

3. **关键场景深挖**  
   - 至少 3 个场景，每个场景包含：触发条件、关键障碍、成功标准、动作清单（动词-对象-频率-标准-工具/示例）、可替代方案。
   - 动作颗粒度示例：“每周2次-CRM-跟进客户-7日内完成”。
   - 输出表格形式。

4. **主持人提示语**  
   - 每个问题前先进行总结或肯定，再自然过渡到追问。
   - 语气礼貌友好，突出互动性和情绪价值。
   - 示例：“您提到带教 SOP，这非常关键。能不能带我们具体走一遍动作细节？”

5. **风险与红旗**  
   - 输出一张表格，列出常见风险（如：只有结论没有证据、只谈个例不谈SOP、指标口径不统一），并提供主持人对策。

6. **缺失证据清单**  
   - 输出至少 5 条，提醒研发人员哪些数据、案例、动作还需补充，便于后续完善。
"#;

/// Standing system instruction sent as the first message of every request.
///
/// Immutable; the crate ships a single instance, [`PromptTemplate::INTERVIEW_OUTLINE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptTemplate {
    text: &'static str,
}

impl PromptTemplate {
    /// Course-editor instructions for a six-section Markdown interview outline
    pub const INTERVIEW_OUTLINE: PromptTemplate = PromptTemplate {
        text: INTERVIEW_OUTLINE_PROMPT,
    };

    /// Exact template text, as sent on the wire
    pub fn text(&self) -> &'static str {
        self.text
    }

    /// Section headers the template requires in the output
    pub fn section_headers(&self) -> &'static [&'static str] {
        &SECTION_HEADERS
    }

    /// Placeholder the template asks for when information is missing
    pub fn placeholder_marker(&self) -> &'static str {
        PLACEHOLDER_MARKER
    }
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self::INTERVIEW_OUTLINE
    }
}

/// Interview metadata for one generation.
///
/// The five text fields are free-form and never checked for emptiness; a
/// missing value is the model's job to flag with [`PLACEHOLDER_MARKER`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewRequest {
    pub subject_name: String,
    pub subject_role: String,
    pub topic: String,
    pub goal: String,
    pub audience: String,
    pub model_id: ModelId,
}

impl InterviewRequest {
    /// Labels used in the user turn, in serialization order
    pub const FIELD_LABELS: [&'static str; 5] =
        ["访谈对象姓名", "对象角色/头衔", "主题", "访谈目标", "受众"];

    pub fn new(
        subject_name: impl Into<String>,
        subject_role: impl Into<String>,
        topic: impl Into<String>,
        goal: impl Into<String>,
        audience: impl Into<String>,
        model_id: ModelId,
    ) -> Self {
        Self {
            subject_name: subject_name.into(),
            subject_role: subject_role.into(),
            topic: topic.into(),
            goal: goal.into(),
            audience: audience.into(),
            model_id,
        }
    }

    /// Same as [`new`](Self::new), but with the model given by name.
    ///
    /// # Errors
    ///
    /// Returns [`crate::OutlineError::ConfigurationError`] if `model` is not a
    /// recognized identifier.
    pub fn with_model_name(
        subject_name: impl Into<String>,
        subject_role: impl Into<String>,
        topic: impl Into<String>,
        goal: impl Into<String>,
        audience: impl Into<String>,
        model: &str,
    ) -> OutlineResult<Self> {
        let model_id = model.parse::<ModelId>()?;
        Ok(Self::new(
            subject_name,
            subject_role,
            topic,
            goal,
            audience,
            model_id,
        ))
    }

    /// Field values in serialization order
    pub fn field_values(&self) -> [&str; 5] {
        [
            self.subject_name.as_str(),
            self.subject_role.as_str(),
            self.topic.as_str(),
            self.goal.as_str(),
            self.audience.as_str(),
        ]
    }

    /// Render the user turn: one labelled line per field, values verbatim.
    pub fn to_user_prompt(&self) -> String {
        Self::FIELD_LABELS
            .iter()
            .zip(self.field_values())
            .map(|(label, value)| format!("{label}：{value}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Assemble the request messages: the template as the system turn, the
/// serialized interview fields as the user turn.
pub fn build_messages(template: &PromptTemplate, request: &InterviewRequest) -> [ChatMessage; 2] {
    [
        ChatMessage::system(template.text()),
        ChatMessage::user(request.to_user_prompt()),
    ]
}
