mod question_tests;
