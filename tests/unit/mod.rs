mod pass_tests;
