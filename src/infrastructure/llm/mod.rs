mod mock_llm_client;
mod openai_client;

pub use mock_llm_client::{MockLlmClient, RecordedCall};
pub use openai_client::{OpenAiClient, create_llm_client};
