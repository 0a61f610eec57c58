use crate::{
    models::{
        domain::{
            question_count::{MAX_QUESTIONS, MIN_QUESTIONS},
            GeneratedItems, GenerationOutcome, Language, McqItem, OptionsSource, TaskKind,
        },
        dto::request::GenerateForm,
    },
    views::html::{escape, selected},
};

const DEFAULT_NUM_QUESTIONS: &str = "5";

/// Values echoed back into the form controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub task: TaskKind,
    pub language: Language,
    pub num_questions: String,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            task: TaskKind::default(),
            language: Language::default(),
            num_questions: DEFAULT_NUM_QUESTIONS.to_string(),
        }
    }
}

impl From<&GenerateForm> for FormState {
    fn from(form: &GenerateForm) -> Self {
        Self {
            task: form
                .task
                .as_deref()
                .and_then(|t| t.parse().ok())
                .unwrap_or_default(),
            language: form
                .language
                .as_deref()
                .and_then(|l| l.parse().ok())
                .unwrap_or_default(),
            num_questions: form
                .num_questions
                .clone()
                .unwrap_or_else(|| DEFAULT_NUM_QUESTIONS.to_string()),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PageView {
    pub form: FormState,
    /// Name of the file decoded for this request, if decoding succeeded.
    pub extracted_file: Option<String>,
    pub error: Option<String>,
    /// Prompt shown when no outcome is available, e.g. after a blank reply.
    pub prompt: Option<String>,
    pub outcome: Option<GenerationOutcome>,
}

impl PageView {
    pub fn with_error(form: FormState, error: impl Into<String>) -> Self {
        Self {
            form,
            error: Some(error.into()),
            ..Default::default()
        }
    }
}

const STYLE: &str = "body{font-family:sans-serif;max-width:52rem;margin:2rem auto;padding:0 1rem;color:#222}\
label{display:block;margin-top:1rem;font-weight:bold}\
pre{background:#f6f8fa;padding:.75rem;white-space:pre-wrap;word-break:break-word}\
.error{background:#fdecea;color:#a4262c;padding:.75rem;border-radius:4px}\
.success{color:#1e7e34}\
.warning{background:#fff8e1;padding:.5rem;border-left:4px solid #f0ad4e}\
.note{background:#f0f8ff;padding:10px;border-radius:5px;margin:20px 0;border-left:4px solid #007bff}\
fieldset{margin:.5rem 0 1rem;border:1px solid #ddd}";

pub fn render_page(view: &PageView) -> String {
    let mut out = String::with_capacity(4096);
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str("<title>AI-Powered Question/MCQ Quiz Generator</title>\n");
    out.push_str(&format!("<style>{}</style>\n</head>\n<body>\n", STYLE));
    out.push_str("<h1>AI-Powered Question/MCQ Quiz Generator</h1>\n");

    render_form(&mut out, &view.form);

    if let Some(file_name) = &view.extracted_file {
        out.push_str(&format!(
            "<p class=\"success\">Text File Extracted Successfully! ({})</p>\n",
            escape(file_name)
        ));
    }

    match (&view.outcome, &view.prompt) {
        (Some(outcome), _) => render_outcome(&mut out, outcome),
        (None, Some(prompt)) => render_prompt(&mut out, view.form.task, prompt),
        (None, None) => {}
    }

    if let Some(error) = &view.error {
        out.push_str(&format!(
            "<p class=\"error\" role=\"alert\">{}</p>\n",
            escape(error)
        ));
    }

    out.push_str(
        "<div class=\"note\"><h4>Note:</h4><p>This app generates questions and MCQ quizzes \
         based on the contents of the uploaded text file.</p></div>\n",
    );
    out.push_str("</body>\n</html>\n");
    out
}

fn render_form(out: &mut String, form: &FormState) {
    out.push_str("<form method=\"post\" action=\"/generate\" enctype=\"multipart/form-data\">\n");

    out.push_str("<label for=\"task\">Select Task</label>\n<select id=\"task\" name=\"task\">\n");
    for task in TaskKind::ALL {
        out.push_str(&format!(
            "<option value=\"{}\"{}>{}</option>\n",
            task.as_str(),
            selected(task == form.task),
            task.label()
        ));
    }
    out.push_str("</select>\n");

    out.push_str(
        "<label for=\"language\">Select Language</label>\n<select id=\"language\" name=\"language\">\n",
    );
    for language in Language::ALL {
        out.push_str(&format!(
            "<option value=\"{0}\"{1}>{0}</option>\n",
            language.as_str(),
            selected(language == form.language)
        ));
    }
    out.push_str("</select>\n");

    out.push_str(
        "<label for=\"file\">Upload a Text File</label>\n\
         <input id=\"file\" type=\"file\" name=\"file\" accept=\".txt,text/plain\">\n",
    );

    out.push_str(&format!(
        "<label for=\"num_questions\">Enter Number of Questions ({}-{})</label>\n\
         <input id=\"num_questions\" type=\"text\" name=\"num_questions\" value=\"{}\">\n",
        MIN_QUESTIONS,
        MAX_QUESTIONS,
        escape(&form.num_questions)
    ));

    out.push_str("<p><button type=\"submit\">Generate</button></p>\n</form>\n");
}

fn render_prompt(out: &mut String, task: TaskKind, prompt: &str) {
    let heading = match task {
        TaskKind::Questions => "Prompt sent to AI for questions:",
        TaskKind::Mcq => "Prompt sent to AI for MCQ Quiz:",
    };
    out.push_str(&format!("<p>{}</p>\n<pre><code>{}</code></pre>\n", heading, escape(prompt)));
}

fn render_outcome(out: &mut String, outcome: &GenerationOutcome) {
    render_prompt(out, outcome.task, &outcome.prompt);

    match &outcome.items {
        GeneratedItems::Questions(questions) => {
            out.push_str("<h2>Generated Questions:</h2>\n<ol class=\"questions\">\n");
            for question in questions {
                out.push_str(&format!(
                    "<li><strong>Q{}: {}</strong></li>\n",
                    question.number,
                    escape(&question.text)
                ));
            }
            out.push_str("</ol>\n");
        }
        GeneratedItems::Quiz(items) => {
            out.push_str(&format!(
                "<p>AI Response:</p>\n<pre><code>{}</code></pre>\n",
                escape(outcome.raw_response.trim())
            ));
            out.push_str("<h2>Generated MCQ Quiz:</h2>\n");
            for item in items {
                render_mcq_item(out, item);
            }
        }
    }
}

fn render_mcq_item(out: &mut String, item: &McqItem) {
    out.push_str(&format!(
        "<div class=\"mcq\">\n<p><strong>Q{}: {}</strong></p>\n",
        item.number,
        escape(&item.question)
    ));
    if item.options_source == OptionsSource::Placeholder {
        out.push_str(
            "<p class=\"warning\">The response did not list options for this question; \
             placeholder options are shown.</p>\n",
        );
    }
    out.push_str(&format!(
        "<fieldset>\n<legend>Select your answer for Q{}:</legend>\n",
        item.number
    ));
    for (idx, option) in item.options.iter().enumerate() {
        out.push_str(&format!(
            "<label><input type=\"radio\" name=\"q{}\" value=\"{}\"{}> {}</label>\n",
            item.number,
            idx,
            if idx == 0 { " checked" } else { "" },
            escape(option)
        ));
    }
    out.push_str("</fieldset>\n");
    out.push_str(&format!(
        "<p><strong>Correct Answer: {}</strong></p>\n</div>\n",
        escape(&item.correct_answer)
    ));
}
