mod composite_file_loader_test;
mod fallback_chain_test;
mod legacy_doc_adapter_test;
mod pdf_strategies_test;
mod plain_text_adapter_test;
