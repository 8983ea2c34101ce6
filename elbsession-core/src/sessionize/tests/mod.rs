mod sessionizer_tests;
