mod conf_cmd_tests;
