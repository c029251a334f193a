mod libreoffice_converter_test;
