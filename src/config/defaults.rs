pub const DEFAULT_INSTRUCTIONS: &str = "\
This is a Procure to Pay process. You will be provided with the Purchase Invoice image as input.
Note that Step 3 can be performed only after Step 1 and Step 2 are completed.
Step 1: As a first step, you will extract the Contract ID and Supplier ID from the Invoice and also all the line items from the Invoice in the form of a table.
Step 2: You will then use the function tool to call the contract lookup with the Contract ID and Supplier ID to get the contract details.
Step 3: You will then use the file search tool to retrieve the business rules applicable to detection of anomalies in the Procure to Pay process.
Step 4: Then, apply the retrieved business rules to match the invoice line items with the contract details fetched from the system, and detect anomalies if any.
Provide the list of anomalies detected in the Invoice, and the business rules that were violated.
";

pub const DEFAULT_USER_PROMPT: &str = "here are the Purchase Invoice image(s) as input. Detect anomalies in the procure to pay process and give me a detailed report";

pub fn default_api_version() -> String {
    "2025-03-01-preview".to_string()
}

pub fn default_model() -> String {
    "gpt-4o".to_string()
}

pub fn default_max_num_results() -> u32 {
    20
}

pub fn default_image_detail() -> String {
    "high".to_string()
}

pub fn default_stream_timeout() -> u64 {
    120
}

pub fn default_request_timeout() -> u64 {
    300
}

pub fn default_tool_timeout() -> u64 {
    30
}
