mod document_processor_test;
