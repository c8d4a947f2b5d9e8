mod employees_tests;
