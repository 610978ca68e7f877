use serde::{Deserialize, Serialize};

use crate::parser::ParsedStyle;
use crate::registry::{Notifier, StyleRegistry};
use crate::synthesizer::StyleSynthesizer;

/// Requests the surrounding UI layer may send. The wire format is a tagged
/// JSON object: `{"type": "parse-css", "css": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Request {
    /// Preview only: report the styles that would be created
    ParseCss { css: String },

    /// Run the full synthesis against the registry
    CreateStyles { css: String },

    /// Terminate the session
    Cancel,
}

/// Replies to the UI layer, one per request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Response {
    FoundStyles { styles: Vec<ParsedStyle> },
    StylesCreated { created: usize },
    Error { message: String },
    Closed,
}

/// Handle one request against the injected registry and notifier.
///
/// This is the seam the transport adapter calls; it owns no state and reaches
/// for no ambient context. Failures surface both as a notification (the
/// user-visible channel) and as an [`Response::Error`] reply so the transport
/// always has something to send back. A [`Response::Closed`] reply means the
/// session is over and the transport should stop reading.
pub fn handle_request<R: StyleRegistry, N: Notifier>(
    request: Request,
    synthesizer: &StyleSynthesizer,
    registry: &mut R,
    notifier: &N,
) -> Response {
    match request {
        Request::ParseCss { css } => Response::FoundStyles {
            styles: synthesizer.preview(&css).styles,
        },
        Request::CreateStyles { css } => match synthesizer.synthesize(registry, &css) {
            Ok(result) => {
                notifier.notify(&format!("Created {} text styles", result.created));
                Response::StylesCreated {
                    created: result.created,
                }
            }
            Err(error) => {
                let message = error.to_string();
                notifier.notify(&message);
                Response::Error { message }
            }
        },
        Request::Cancel => Response::Closed,
    }
}
