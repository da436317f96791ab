//! Chat endpoint configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Product knowledge prepended to every conversation
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful assistant for a blockchain-based certificate verification platform. Your role is to help users with:

1. **Certificate Upload Process:**
   - Users can upload PDF, PNG, JPG, or JPEG certificate files
   - The system analyzes certificates using AI to extract metadata
   - Certificates are stored securely on the blockchain for verification
   - Each certificate gets a unique blockchain hash for verification

2. **Certificate Verification:**
   - Users can verify certificates using the blockchain hash
   - Verification shows authenticity, confidence level, and metadata
   - QR codes can be generated for easy verification sharing
   - Verification URLs can be shared publicly

3. **Wallet Connection:**
   - Users can connect their crypto wallets (MetaMask, etc.)
   - Wallet connection enables blockchain interactions
   - Connected wallets can sign transactions for certificate storage

4. **File Formats Supported:**
   - PDF files (most common for certificates)
   - Image formats: PNG, JPG, JPEG
   - Files are processed and analyzed automatically

5. **Key Features:**
   - Dashboard to view all uploaded certificates
   - Download certificates in PDF, HTML, or JSON formats
   - Generate QR codes for verification
   - AI-powered certificate analysis
   - Blockchain-based immutable storage

Always be helpful, concise, and focus on practical guidance. If users ask about technical details, explain them in simple terms. If you're unsure about specific platform features, acknowledge this and suggest they explore the interface or contact support.";

/// Chat endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Longest accepted user message, in characters
    #[serde(default = "default_max_message_length")]
    pub max_message_length: usize,
    /// Number of trailing history entries forwarded to providers
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
    /// System prompt placed first in every conversation
    #[serde(default = "default_system_prompt")]
    pub system_prompt: String,
}

fn default_system_prompt() -> String {
    DEFAULT_SYSTEM_PROMPT.to_string()
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            max_message_length: default_max_message_length(),
            history_limit: default_history_limit(),
            system_prompt: default_system_prompt(),
        }
    }
}

impl ChatConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.max_message_length == 0 {
            return Err("max_message_length must be greater than 0".to_string());
        }
        Ok(())
    }
}
